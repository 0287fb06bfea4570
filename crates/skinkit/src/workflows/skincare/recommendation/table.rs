use super::super::assessment::Concern;

pub const SUNSCREEN_PRODUCT_ID: &str = "mineral-spf50-sunscreen";
pub const EYE_CREAM_PRODUCT_ID: &str = "caffeine-eye-cream";
pub const NIGHT_CREAM_PRODUCT_ID: &str = "peptide-night-cream";

/// Candidate product ids per concern, most targeted first.
pub(crate) fn candidates_for(concern: Concern) -> &'static [&'static str] {
    match concern {
        Concern::Acne => &[
            "salicylic-acid-cleanser",
            "clarifying-spot-treatment",
            "niacinamide-serum",
            "oil-free-gel-moisturizer",
        ],
        Concern::Pores => &[
            "bha-exfoliating-toner",
            "niacinamide-serum",
            "clay-purifying-mask",
        ],
        Concern::DarkCircles => &[EYE_CREAM_PRODUCT_ID, "vitamin-c-serum"],
        Concern::Aging => &[
            "retinol-night-serum",
            NIGHT_CREAM_PRODUCT_ID,
            EYE_CREAM_PRODUCT_ID,
        ],
        Concern::Hydration => &[
            "gentle-hydrating-cleanser",
            "hyaluronic-acid-serum",
            "ceramide-moisturizer",
        ],
        Concern::SkinHealth => &[
            "gentle-hydrating-cleanser",
            "vitamin-c-serum",
            "ceramide-moisturizer",
        ],
    }
}
