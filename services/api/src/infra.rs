use career_compass::assessment::{AssessmentEngine, CatalogError, RuleCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine backed by the catalog at `path`, or by the built-in catalog when no path is set.
pub(crate) fn load_engine(path: Option<&Path>) -> Result<AssessmentEngine, CatalogError> {
    match path {
        Some(path) => {
            let catalog = RuleCatalog::from_path(path)?;
            info!(path = %path.display(), rules = catalog.rules().len(), "loaded rule catalog");
            Ok(AssessmentEngine::new(catalog))
        }
        None => AssessmentEngine::shared().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_standard_catalog() {
        let engine = load_engine(None).expect("standard catalog");
        assert_eq!(engine.catalog().rules().len(), 15);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let result = load_engine(Some(Path::new("/nonexistent/catalog.json")));
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
