//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` holds everything a transport needs to serve purchases: the
//! generator built over the loaded catalog and the resolved database backend
//! if one was configured.

use crate::config::ServiceConfig;
use crate::core::{CatalogState, FakeDataSource, ProductCatalog, PurchaseGenerator};
use crate::storage::{DatabaseBackend, backend_for};
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all service state
pub struct ServerHost {
    /// Generator over the immutable catalog
    pub generator: Arc<PurchaseGenerator>,

    /// Resolved database target, when the config names one
    pub database: Option<Arc<dyn DatabaseBackend>>,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Fails only when the configuration names an unsupported database type.
    pub fn from_builder_components(
        config: ServiceConfig,
        catalog: ProductCatalog,
        fakes: Arc<dyn FakeDataSource>,
    ) -> Result<Self> {
        let database: Option<Arc<dyn DatabaseBackend>> = match &config.database {
            Some(settings) => {
                let backend: Arc<dyn DatabaseBackend> = Arc::from(backend_for(settings)?);
                tracing::info!(backend = %backend.kind(), target = %backend.describe(), "Database backend configured");
                Some(backend)
            }
            None => None,
        };

        let generator = PurchaseGenerator::new(
            Arc::new(catalog),
            fakes,
            config.generator_settings(),
        );

        match generator.state() {
            CatalogState::Loaded { size } => tracing::info!(size, "Catalog ready"),
            CatalogState::Unavailable => {
                tracing::warn!("Catalog unavailable, purchase routes will answer 500")
            }
        }

        Ok(Self {
            generator: Arc::new(generator),
            database,
        })
    }

    pub fn catalog_state(&self) -> CatalogState {
        self.generator.state()
    }

    /// Check if the host can serve purchases
    pub fn is_ready(&self) -> bool {
        matches!(self.catalog_state(), CatalogState::Loaded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FakerSource, ProductRecord};
    use crate::storage::{BackendKind, ConnectionSettings};

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            ProductRecord::new("Cafe", 7894900011517, 15.5),
            ProductRecord::new("Leite", 7891000053508, 4.79),
        ])
    }

    fn make_host(config: ServiceConfig, catalog: ProductCatalog) -> Result<ServerHost> {
        ServerHost::from_builder_components(config, catalog, Arc::new(FakerSource))
    }

    #[test]
    fn test_host_ready_with_products() {
        let host = make_host(ServiceConfig::default(), catalog()).expect("should build host");
        assert!(host.is_ready());
        assert_eq!(host.catalog_state(), CatalogState::Loaded { size: 2 });
        assert!(host.database.is_none());
    }

    #[test]
    fn test_host_not_ready_with_empty_catalog() {
        let host = make_host(ServiceConfig::default(), ProductCatalog::empty())
            .expect("empty catalog is not fatal");
        assert!(!host.is_ready());
    }

    #[test]
    fn test_host_resolves_database_backend() {
        let config = ServiceConfig {
            database: Some(ConnectionSettings {
                db_type: "ClickHouse".to_string(),
                host: "ch".to_string(),
                port: 8123,
                user: "default".to_string(),
                password: "pw".to_string(),
                database: "events".to_string(),
            }),
            ..ServiceConfig::default()
        };
        let host = make_host(config, catalog()).expect("should build host");
        assert_eq!(
            host.database.as_ref().map(|db| db.kind()),
            Some(BackendKind::ClickHouse)
        );
    }

    #[test]
    fn test_host_rejects_unsupported_database() {
        let config = ServiceConfig {
            database: Some(ConnectionSettings {
                db_type: "sqlite".to_string(),
                host: String::new(),
                port: 0,
                user: String::new(),
                password: String::new(),
                database: String::new(),
            }),
            ..ServiceConfig::default()
        };
        let err = make_host(config, catalog()).err().expect("should be Err");
        assert!(err.to_string().contains("sqlite"));
    }
}
