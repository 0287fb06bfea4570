use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info};

use super::super::assessment::{derive, Concern, RawSignal, SignalError};
use super::super::catalog::{CatalogError, CatalogRepository, Product};
use super::super::recommendation::{build_kit, recommend, PersonalizedKit, RecommendationConfig};
use super::domain::{AnalysisId, AnalysisRecord};
use super::store::{AnalysisStore, StoreError};

/// Service composing the derivation engine, the analysis store, and the catalog provider.
pub struct SkinAnalysisService<S, C> {
    store: Arc<S>,
    catalog: Arc<C>,
    config: RecommendationConfig,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("analysis-{id:06}"))
}

impl<S, C> SkinAnalysisService<S, C>
where
    S: AnalysisStore + 'static,
    C: CatalogRepository + 'static,
{
    pub fn new(store: Arc<S>, catalog: Arc<C>, config: RecommendationConfig) -> Self {
        Self {
            store,
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Validate a provider signal, derive its assessment, and store the result.
    pub fn analyze(&self, signal: RawSignal) -> Result<AnalysisRecord, AnalysisServiceError> {
        signal.validate()?;

        let assessment = derive(&signal);
        let record = AnalysisRecord {
            analysis_id: next_analysis_id(),
            signal,
            assessment,
            created_at: Utc::now(),
        };

        let stored = self.store.insert(record)?;
        info!(
            analysis_id = %stored.analysis_id.0,
            skin_score = stored.assessment.skin_score,
            concerns = ?stored.assessment.concerns,
            "skin analysis stored"
        );
        Ok(stored)
    }

    /// Same as [`Self::analyze`], starting from a raw face-analysis provider payload.
    pub fn analyze_face_response(
        &self,
        response: &Value,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let signal = RawSignal::from_face_response(response)?;
        self.analyze(signal)
    }

    pub fn get(&self, analysis_id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .store
            .fetch(analysis_id)?
            .ok_or(StoreError::NotFound)?;
        Ok(record)
    }

    /// Products for a stored analysis, most severe concern first.
    pub fn recommendations(
        &self,
        analysis_id: &AnalysisId,
    ) -> Result<Vec<Product>, AnalysisServiceError> {
        let record = self.get(analysis_id)?;
        let catalog = self.catalog.snapshot()?;
        let products = recommend(
            &record.assessment.prioritized_concerns(),
            &catalog,
            self.config.recommendation_limit,
        );
        debug!(analysis_id = %analysis_id.0, count = products.len(), "recommendations built");
        Ok(products)
    }

    pub fn kit(&self, analysis_id: &AnalysisId) -> Result<PersonalizedKit, AnalysisServiceError> {
        let record = self.get(analysis_id)?;
        let catalog = self.catalog.snapshot()?;
        let kit = build_kit(
            &record.assessment.prioritized_concerns(),
            &catalog,
            &self.config,
        );
        info!(
            analysis_id = %analysis_id.0,
            morning_steps = kit.morning_routine.len(),
            evening_steps = kit.evening_routine.len(),
            bundle_price = kit.bundle_price,
            "personalized kit built"
        );
        Ok(kit)
    }

    /// Recommendations for caller-supplied concerns, in the order given.
    pub fn recommend_for(
        &self,
        concerns: &[Concern],
        limit: Option<usize>,
    ) -> Result<Vec<Product>, AnalysisServiceError> {
        let catalog = self.catalog.snapshot()?;
        let limit = limit.unwrap_or(self.config.recommendation_limit);
        Ok(recommend(concerns, &catalog, limit))
    }

    pub fn purge_expired(&self) -> Result<usize, AnalysisServiceError> {
        let purged = self.store.purge_expired()?;
        if purged > 0 {
            debug!(purged, "expired analyses purged");
        }
        Ok(purged)
    }
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Signal(#[from] SignalError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
