use std::sync::Arc;
use tracing::warn;

use bizmatch::catalog::{Catalog, CatalogSource};
use bizmatch::config::EngineConfig;

#[derive(Clone)]
pub struct HandlerState {
    pub catalog_source: Arc<dyn CatalogSource>,

    pub engine_config: Arc<EngineConfig>,
}

impl HandlerState {
    pub fn new(catalog_source: Arc<dyn CatalogSource>, engine_config: EngineConfig) -> Self {
        Self {
            catalog_source,
            engine_config: Arc::new(engine_config),
        }
    }

    /// Loads a fresh catalog snapshot. A failed load yields an empty catalog.
    ///
    /// Blocking; call from `spawn_blocking`.
    pub fn load_catalog(&self) -> Catalog {
        match self.catalog_source.load() {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "Catalog load failed, continuing with an empty catalog");
                Catalog::empty()
            }
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::clone(&self.engine_config)
    }
}
