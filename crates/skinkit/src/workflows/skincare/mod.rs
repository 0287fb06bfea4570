//! Skin assessment derivation and the personalized kit pipeline built on top of it.
//!
//! A face-analysis provider hands over a beauty score and an age; `assessment` turns that into
//! per-concern findings, `recommendation` maps the findings onto the product `catalog`, and
//! `analysis` wires both behind a TTL store and an HTTP router.

pub mod analysis;
pub mod assessment;
pub mod catalog;
pub mod recommendation;

pub use analysis::{analysis_router, AnalysisId, AnalysisRecord, SkinAnalysisService};
pub use assessment::{derive, Concern, Level, RawSignal, SkinAssessment};
pub use catalog::{Product, ProductCatalog, ProductCategory};
pub use recommendation::{build_kit, recommend, PersonalizedKit, RecommendationConfig};
