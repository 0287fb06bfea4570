use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use serde_json::json;
use skinkit::workflows::skincare::analysis::AnalysisStore;
use skinkit::workflows::skincare::catalog::CatalogRepository;
use skinkit::workflows::skincare::{analysis_router, SkinAnalysisService};
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_analysis_routes<S, C>(
    service: Arc<SkinAnalysisService<S, C>>,
) -> axum::Router
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    analysis_router(service)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.readiness.load(Ordering::Relaxed) {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
