//! Concern-driven product recommendations and the two-routine personalized kit.

mod config;
mod kit;
mod table;

pub use config::RecommendationConfig;
pub use kit::{PersonalizedKit, RoutineStep, TimeOfDay};
pub use table::{EYE_CREAM_PRODUCT_ID, NIGHT_CREAM_PRODUCT_ID, SUNSCREEN_PRODUCT_ID};

use super::assessment::Concern;
use super::catalog::{Product, ProductCatalog};
use kit::assemble_kit;
use table::candidates_for;

/// Rank catalog products for the given concerns, most important concern first.
///
/// Each concern contributes its whole candidate list; accumulation stops once `limit` ids are
/// collected. Sunscreen is appended after the concern ids, so a full list can truncate it away.
pub fn recommend(concerns: &[Concern], catalog: &ProductCatalog, limit: usize) -> Vec<Product> {
    let mut ids: Vec<&'static str> = Vec::new();

    for concern in concerns {
        if ids.len() >= limit {
            break;
        }
        for &id in candidates_for(*concern) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    if !ids.contains(&SUNSCREEN_PRODUCT_ID) {
        ids.push(SUNSCREEN_PRODUCT_ID);
    }

    ids.iter()
        .filter_map(|id| catalog.get(id))
        .take(limit)
        .cloned()
        .collect()
}

/// Build the morning/evening kit from a larger recommendation pool.
pub fn build_kit(
    concerns: &[Concern],
    catalog: &ProductCatalog,
    config: &RecommendationConfig,
) -> PersonalizedKit {
    let pool = recommend(concerns, catalog, config.kit_pool_limit);
    assemble_kit(&pool, config.bundle_discount_rate)
}
