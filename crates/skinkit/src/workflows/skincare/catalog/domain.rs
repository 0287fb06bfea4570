use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Routine slot a product can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Cleanser,
    Moisturizer,
    Serum,
    Treatment,
    Sunscreen,
}

impl ProductCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ProductCategory::Cleanser => "cleanser",
            ProductCategory::Moisturizer => "moisturizer",
            ProductCategory::Serum => "serum",
            ProductCategory::Treatment => "treatment",
            ProductCategory::Sunscreen => "sunscreen",
        }
    }
}

/// Catalog entry as supplied by the product provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    pub category: ProductCategory,
    #[serde(default)]
    pub concerns: BTreeSet<String>,
    pub rating: f32,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Discount price when present, else the list price.
    pub fn effective_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }

    pub fn targets(&self, tag: &str) -> bool {
        self.concerns.contains(tag)
    }

    pub fn targets_any(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.targets(tag))
    }
}
