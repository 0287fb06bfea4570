use super::domain::{Product, ProductCategory, ProductId};

struct Seed {
    id: &'static str,
    name: &'static str,
    category: ProductCategory,
    price: f64,
    discount_price: Option<f64>,
    rating: f32,
    concerns: &'static [&'static str],
    description: &'static str,
}

const HOUSE_BRAND: &str = "Skinkit Lab";

const SEEDS: &[Seed] = &[
    Seed {
        id: "salicylic-acid-cleanser",
        name: "Clarifying Salicylic Cleanser",
        category: ProductCategory::Cleanser,
        price: 24.0,
        discount_price: Some(19.0),
        rating: 4.6,
        concerns: &["acne", "pores", "oil-control"],
        description: "2% BHA gel cleanser that clears congestion without stripping.",
    },
    Seed {
        id: "gentle-hydrating-cleanser",
        name: "Gentle Hydrating Cleanser",
        category: ProductCategory::Cleanser,
        price: 18.0,
        discount_price: None,
        rating: 4.7,
        concerns: &["hydration", "skin-health", "sensitivity"],
        description: "Cream cleanser with glycerin for dry and sensitive skin.",
    },
    Seed {
        id: "bha-exfoliating-toner",
        name: "BHA Exfoliating Toner",
        category: ProductCategory::Treatment,
        price: 29.0,
        discount_price: None,
        rating: 4.5,
        concerns: &["pores", "texture", "acne"],
        description: "Leave-on toner that refines pores and smooths texture.",
    },
    Seed {
        id: "clarifying-spot-treatment",
        name: "Clarifying Spot Treatment",
        category: ProductCategory::Treatment,
        price: 16.0,
        discount_price: None,
        rating: 4.3,
        concerns: &["acne"],
        description: "Benzoyl peroxide spot gel for active breakouts.",
    },
    Seed {
        id: "clay-purifying-mask",
        name: "Purifying Clay Mask",
        category: ProductCategory::Treatment,
        price: 32.0,
        discount_price: Some(26.0),
        rating: 4.4,
        concerns: &["pores", "texture", "oil-control"],
        description: "Kaolin mask that draws out excess sebum twice a week.",
    },
    Seed {
        id: "caffeine-eye-cream",
        name: "Caffeine Eye Cream",
        category: ProductCategory::Treatment,
        price: 34.0,
        discount_price: None,
        rating: 4.2,
        concerns: &["dark-circles", "aging", "puffiness"],
        description: "Brightening eye cream with caffeine and peptides.",
    },
    Seed {
        id: "niacinamide-serum",
        name: "Niacinamide 10% Serum",
        category: ProductCategory::Serum,
        price: 22.0,
        discount_price: None,
        rating: 4.6,
        concerns: &["acne", "pores", "dark-spots"],
        description: "Balances oil and visibly minimizes pores.",
    },
    Seed {
        id: "vitamin-c-serum",
        name: "Vitamin C Brightening Serum",
        category: ProductCategory::Serum,
        price: 45.0,
        discount_price: Some(38.0),
        rating: 4.8,
        concerns: &["dark-spots", "dullness", "dark-circles", "skin-health"],
        description: "15% ascorbic acid serum for radiance and even tone.",
    },
    Seed {
        id: "retinol-night-serum",
        name: "Retinol Night Serum",
        category: ProductCategory::Serum,
        price: 52.0,
        discount_price: None,
        rating: 4.7,
        concerns: &["aging", "wrinkles", "texture", "acne"],
        description: "Encapsulated 0.3% retinol for fine lines and renewal.",
    },
    Seed {
        id: "hyaluronic-acid-serum",
        name: "Hyaluronic Acid Serum",
        category: ProductCategory::Serum,
        price: 28.0,
        discount_price: None,
        rating: 4.7,
        concerns: &["hydration", "dullness"],
        description: "Multi-weight hyaluronic acid for lasting moisture.",
    },
    Seed {
        id: "oil-free-gel-moisturizer",
        name: "Oil-Free Gel Moisturizer",
        category: ProductCategory::Moisturizer,
        price: 26.0,
        discount_price: None,
        rating: 4.4,
        concerns: &["acne", "pores", "oil-control"],
        description: "Lightweight gel that hydrates without clogging pores.",
    },
    Seed {
        id: "ceramide-moisturizer",
        name: "Ceramide Barrier Moisturizer",
        category: ProductCategory::Moisturizer,
        price: 30.0,
        discount_price: Some(25.0),
        rating: 4.8,
        concerns: &["hydration", "skin-health", "sensitivity"],
        description: "Rich cream that restores the moisture barrier.",
    },
    Seed {
        id: "peptide-night-cream",
        name: "Peptide Night Cream",
        category: ProductCategory::Moisturizer,
        price: 48.0,
        discount_price: None,
        rating: 4.6,
        concerns: &["aging", "wrinkles", "hydration"],
        description: "Overnight cream with peptides for firmness.",
    },
    Seed {
        id: "mineral-spf50-sunscreen",
        name: "Mineral Sunscreen SPF 50",
        category: ProductCategory::Sunscreen,
        price: 27.0,
        discount_price: None,
        rating: 4.5,
        concerns: &["skin-health", "aging", "dark-spots"],
        description: "Zinc oxide broad-spectrum protection with no white cast.",
    },
];

pub(crate) fn standard_products() -> Vec<Product> {
    SEEDS
        .iter()
        .map(|seed| Product {
            id: ProductId::from(seed.id),
            name: seed.name.to_string(),
            brand: HOUSE_BRAND.to_string(),
            price: seed.price,
            discount_price: seed.discount_price,
            category: seed.category,
            concerns: seed.concerns.iter().map(|tag| tag.to_string()).collect(),
            rating: seed.rating,
            description: seed.description.to_string(),
        })
        .collect()
}
