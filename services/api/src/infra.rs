use metrics_exporter_prometheus::PrometheusHandle;
use skinkit::workflows::skincare::catalog::{CatalogError, CatalogRepository, ProductCatalog};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog snapshot shared between request handlers and whoever refreshes it.
#[derive(Clone)]
pub(crate) struct SharedCatalogRepository {
    current: Arc<RwLock<ProductCatalog>>,
}

impl SharedCatalogRepository {
    pub(crate) fn new(catalog: ProductCatalog) -> Self {
        Self {
            current: Arc::new(RwLock::new(catalog)),
        }
    }

    pub(crate) fn standard() -> Self {
        Self::new(ProductCatalog::standard())
    }

    pub(crate) fn replace(&self, catalog: ProductCatalog) -> Result<(), CatalogError> {
        let mut guard = self
            .current
            .write()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;
        *guard = catalog;
        Ok(())
    }
}

impl Default for SharedCatalogRepository {
    fn default() -> Self {
        Self::standard()
    }
}

impl CatalogRepository for SharedCatalogRepository {
    fn snapshot(&self) -> Result<ProductCatalog, CatalogError> {
        let guard = self
            .current
            .read()
            .map_err(|_| CatalogError::Unavailable("catalog lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

/// Read a JSON product list from disk.
pub(crate) fn load_catalog(path: &Path) -> Result<ProductCatalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        CatalogError::Unavailable(format!("failed to read {}: {err}", path.display()))
    })?;
    let catalog: ProductCatalog = serde_json::from_str(&raw)?;
    Ok(catalog)
}

/// Standard catalog unless a file override was supplied.
pub(crate) fn catalog_repository(
    path: Option<&Path>,
) -> Result<SharedCatalogRepository, CatalogError> {
    match path {
        Some(path) => Ok(SharedCatalogRepository::new(load_catalog(path)?)),
        None => Ok(SharedCatalogRepository::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("skinkit-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("write scratch file");
        path
    }

    #[test]
    fn shared_repository_serves_replaced_catalog() {
        let repository = SharedCatalogRepository::standard();
        assert_eq!(
            repository.snapshot().expect("snapshot").len(),
            ProductCatalog::standard().len()
        );

        repository
            .replace(ProductCatalog::new(Vec::new()))
            .expect("replace succeeds");
        assert!(repository.snapshot().expect("snapshot").is_empty());
    }

    #[test]
    fn catalog_file_overrides_standard_products() {
        let path = scratch_file(
            "catalog.json",
            r#"[{
                "id": "travel-sunscreen",
                "name": "Travel SPF 30",
                "brand": "Skinkit Lab",
                "price": 12.0,
                "category": "sunscreen",
                "concerns": ["hydration"],
                "rating": 4.1,
                "description": "Pocket-sized daily protection."
            }]"#,
        );

        let repository = catalog_repository(Some(&path)).expect("catalog loads");
        let catalog = repository.snapshot().expect("snapshot");
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("travel-sunscreen").is_some());
    }

    #[test]
    fn missing_catalog_file_is_unavailable() {
        let path = std::env::temp_dir().join("skinkit-does-not-exist.json");
        match load_catalog(&path) {
            Err(CatalogError::Unavailable(message)) => {
                assert!(message.contains("skinkit-does-not-exist.json"));
            }
            other => panic!("expected unavailable, got {other:?}"),
        }
    }

    #[test]
    fn malformed_catalog_file_is_invalid() {
        let path = scratch_file("broken.json", "{ not json");
        let result = load_catalog(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(CatalogError::Invalid(_))));
    }
}
