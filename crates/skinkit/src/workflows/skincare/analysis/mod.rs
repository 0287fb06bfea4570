//! Analysis intake, short-lived storage, and the HTTP surface for assessments and kits.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{AnalysisId, AnalysisRecord, AnalysisView};
pub use router::{analysis_router, RecommendationRequest};
pub use service::{AnalysisServiceError, SkinAnalysisService};
pub use store::{AnalysisStore, StoreError, TtlAnalysisStore};
