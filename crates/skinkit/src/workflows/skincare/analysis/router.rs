use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use super::super::assessment::{Concern, RawSignal};
use super::super::catalog::CatalogRepository;
use super::domain::AnalysisId;
use super::service::{AnalysisServiceError, SkinAnalysisService};
use super::store::{AnalysisStore, StoreError};

/// Body for ad-hoc recommendation requests.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub concerns: Vec<Concern>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Router builder exposing analysis, recommendation, and kit endpoints.
pub fn analysis_router<S, C>(service: Arc<SkinAnalysisService<S, C>>) -> Router
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    Router::new()
        .route("/api/v1/analysis", post(analyze_handler::<S, C>))
        .route("/api/v1/analysis/face", post(face_handler::<S, C>))
        .route(
            "/api/v1/analysis/:analysis_id",
            get(analysis_handler::<S, C>),
        )
        .route(
            "/api/v1/analysis/:analysis_id/recommendations",
            get(recommendations_handler::<S, C>),
        )
        .route(
            "/api/v1/analysis/:analysis_id/kit",
            get(kit_handler::<S, C>),
        )
        .route(
            "/api/v1/recommendations",
            post(recommend_handler::<S, C>),
        )
        .with_state(service)
}

pub(crate) async fn analyze_handler<S, C>(
    State(service): State<Arc<SkinAnalysisService<S, C>>>,
    axum::Json(signal): axum::Json<RawSignal>,
) -> Response
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    match service.analyze(signal) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn face_handler<S, C>(
    State(service): State<Arc<SkinAnalysisService<S, C>>>,
    axum::Json(payload): axum::Json<Value>,
) -> Response
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    match service.analyze_face_response(&payload) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analysis_handler<S, C>(
    State(service): State<Arc<SkinAnalysisService<S, C>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    match service.get(&AnalysisId(analysis_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<S, C>(
    State(service): State<Arc<SkinAnalysisService<S, C>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    match service.recommendations(&AnalysisId(analysis_id)) {
        Ok(products) => (StatusCode::OK, axum::Json(products)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn kit_handler<S, C>(
    State(service): State<Arc<SkinAnalysisService<S, C>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    match service.kit(&AnalysisId(analysis_id)) {
        Ok(kit) => (StatusCode::OK, axum::Json(kit)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommend_handler<S, C>(
    State(service): State<Arc<SkinAnalysisService<S, C>>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    match service.recommend_for(&request.concerns, request.limit) {
        Ok(products) => (StatusCode::OK, axum::Json(products)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AnalysisServiceError) -> Response {
    let status = match &error {
        AnalysisServiceError::Signal(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AnalysisServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        AnalysisServiceError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        AnalysisServiceError::Store(StoreError::Unavailable(_))
        | AnalysisServiceError::Catalog(_) => {
            warn!(%error, "analysis request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
