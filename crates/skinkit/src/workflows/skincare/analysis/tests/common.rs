use std::sync::Arc;

use axum::response::Response;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use crate::workflows::skincare::analysis::domain::{AnalysisId, AnalysisRecord};
use crate::workflows::skincare::analysis::store::{AnalysisStore, StoreError, TtlAnalysisStore};
use crate::workflows::skincare::analysis::{analysis_router, SkinAnalysisService};
use crate::workflows::skincare::assessment::{derive, RawSignal};
use crate::workflows::skincare::catalog::{CatalogError, CatalogRepository, ProductCatalog};
use crate::workflows::skincare::recommendation::RecommendationConfig;

pub(super) type MemoryService = SkinAnalysisService<TtlAnalysisStore, ProductCatalog>;

pub(super) fn build_service() -> (MemoryService, Arc<TtlAnalysisStore>) {
    let store = Arc::new(TtlAnalysisStore::new(Duration::minutes(30)));
    let catalog = Arc::new(ProductCatalog::standard());
    let service = SkinAnalysisService::new(store.clone(), catalog, RecommendationConfig::default());
    (service, store)
}

pub(super) fn router_with_service(service: MemoryService) -> axum::Router {
    analysis_router(Arc::new(service))
}

pub(super) fn epoch() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn record(id: &str, beauty_score: f64, age: u32) -> AnalysisRecord {
    let signal = RawSignal::new(beauty_score, age);
    AnalysisRecord {
        analysis_id: AnalysisId(id.to_string()),
        signal,
        assessment: derive(&signal),
        created_at: epoch(),
    }
}

pub(super) fn face_payload(gender: &str, male: f64, female: f64, age: u32) -> Value {
    json!({
        "request_id": "1700000000,abc",
        "faces": [{
            "face_token": "token-1",
            "attributes": {
                "gender": { "value": gender },
                "age": { "value": age },
                "beauty": { "male_score": male, "female_score": female }
            }
        }]
    })
}

pub(super) struct UnavailableStore;

impl AnalysisStore for UnavailableStore {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, StoreError> {
        Err(StoreError::Unavailable("cache offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, StoreError> {
        Err(StoreError::Unavailable("cache offline".to_string()))
    }

    fn purge_expired(&self) -> Result<usize, StoreError> {
        Err(StoreError::Unavailable("cache offline".to_string()))
    }
}

pub(super) struct UnavailableCatalog;

impl CatalogRepository for UnavailableCatalog {
    fn snapshot(&self) -> Result<ProductCatalog, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
