//! Read-only product catalog snapshots and the provider boundary that supplies them.

mod domain;
mod standard;

pub use domain::{Product, ProductCategory, ProductId};

use serde::{Deserialize, Deserializer, Serialize};

/// Immutable catalog snapshot, in provider order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Later duplicates of an id are dropped so lookups stay unambiguous.
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if !unique.iter().any(|existing| existing.id == product.id) {
                unique.push(product);
            }
        }
        Self { products: unique }
    }

    /// House catalog referenced by the concern recommendation table.
    pub fn standard() -> Self {
        Self::new(standard::standard_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id.as_str() == id)
    }

    pub fn by_category(&self, category: ProductCategory) -> impl Iterator<Item = &Product> + '_ {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    pub fn by_concern<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Product> + 'a {
        self.products.iter().filter(move |product| product.targets(tag))
    }
}

impl<'de> Deserialize<'de> for ProductCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Product>::deserialize(deserializer).map(Self::new)
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Provider of catalog snapshots (managed database, static file, test double).
pub trait CatalogRepository: Send + Sync {
    fn snapshot(&self) -> Result<ProductCatalog, CatalogError>;
}

impl CatalogRepository for ProductCatalog {
    fn snapshot(&self) -> Result<ProductCatalog, CatalogError> {
        Ok(self.clone())
    }
}

/// Catalog provider failure.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("catalog payload invalid: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_covers_every_category() {
        let catalog = ProductCatalog::standard();

        for category in [
            ProductCategory::Cleanser,
            ProductCategory::Moisturizer,
            ProductCategory::Serum,
            ProductCategory::Treatment,
            ProductCategory::Sunscreen,
        ] {
            assert!(
                catalog.by_category(category).next().is_some(),
                "missing {}",
                category.label()
            );
        }
    }

    #[test]
    fn effective_price_prefers_discount() {
        let catalog = ProductCatalog::standard();
        let cleanser = catalog.get("salicylic-acid-cleanser").expect("seeded");
        let gentle = catalog.get("gentle-hydrating-cleanser").expect("seeded");

        assert_eq!(cleanser.effective_price(), 19.0);
        assert_eq!(gentle.effective_price(), 18.0);
    }

    #[test]
    fn new_drops_duplicate_ids() {
        let standard = ProductCatalog::standard();
        let mut products = standard.products().to_vec();
        let mut shadow = products[0].clone();
        shadow.name = "Shadow".to_string();
        products.push(shadow);

        let catalog = ProductCatalog::new(products);
        assert_eq!(catalog.len(), standard.len());
        assert_ne!(catalog.products()[0].name, "Shadow");
    }

    #[test]
    fn parses_provider_json() {
        let payload = r#"[{
            "id": "spf-30",
            "name": "Daily SPF 30",
            "brand": "Acme",
            "price": 21.5,
            "category": "sunscreen",
            "concerns": ["aging"],
            "rating": 4.1
        }]"#;

        let catalog: ProductCatalog = serde_json::from_str(payload).expect("catalog parses");
        let product = catalog.get("spf-30").expect("product present");
        assert_eq!(product.category, ProductCategory::Sunscreen);
        assert_eq!(product.discount_price, None);
        assert!(catalog.by_concern("aging").any(|p| p.id.as_str() == "spf-30"));
    }
}
