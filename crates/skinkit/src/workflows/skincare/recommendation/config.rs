use serde::{Deserialize, Serialize};

const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;
const DEFAULT_KIT_POOL_LIMIT: usize = 15;
const DEFAULT_BUNDLE_DISCOUNT_RATE: f64 = 0.25;

/// Dials for recommendation size and kit pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub recommendation_limit: usize,
    pub kit_pool_limit: usize,
    pub bundle_discount_rate: f64,
}

impl RecommendationConfig {
    /// Zero limits and rates outside `[0, 1)` fall back to the defaults.
    pub fn new(
        recommendation_limit: usize,
        kit_pool_limit: usize,
        bundle_discount_rate: f64,
    ) -> Self {
        let recommendation_limit = if recommendation_limit > 0 {
            recommendation_limit
        } else {
            DEFAULT_RECOMMENDATION_LIMIT
        };
        let kit_pool_limit = if kit_pool_limit > 0 {
            kit_pool_limit
        } else {
            DEFAULT_KIT_POOL_LIMIT
        };
        let bundle_discount_rate =
            if bundle_discount_rate.is_finite() && (0.0..1.0).contains(&bundle_discount_rate) {
                bundle_discount_rate
            } else {
                DEFAULT_BUNDLE_DISCOUNT_RATE
            };

        Self {
            recommendation_limit,
            kit_pool_limit,
            bundle_discount_rate,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_RECOMMENDATION_LIMIT,
            DEFAULT_KIT_POOL_LIMIT,
            DEFAULT_BUNDLE_DISCOUNT_RATE,
        )
    }
}
