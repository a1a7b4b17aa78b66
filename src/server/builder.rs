//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::ServiceConfig;
use crate::core::{CatalogLoader, CsvCatalogLoader, FakeDataSource, FakerSource, ProductCatalog};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the purchase generator server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServiceConfig::from_yaml_file("config.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: Option<ServiceConfig>,
    catalog: Option<ProductCatalog>,
    loader: Option<Box<dyn CatalogLoader>>,
    fakes: Option<Arc<dyn FakeDataSource>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            catalog: None,
            loader: None,
            fakes: None,
        }
    }

    /// Set the service configuration (defaults apply otherwise)
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use an already loaded catalog instead of reading `catalog_path`
    pub fn with_catalog(mut self, catalog: ProductCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Load the catalog through a custom loader instead of the CSV file
    pub fn with_catalog_loader(mut self, loader: impl CatalogLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }

    /// Replace the default fake-data source
    pub fn with_fake_source(mut self, fakes: impl FakeDataSource + 'static) -> Self {
        self.fakes = Some(Arc::new(fakes));
        self
    }

    /// Build the transport-agnostic host
    ///
    /// The catalog is resolved here, exactly once: an explicit catalog wins,
    /// then a custom loader, then the CSV at `catalog_path`. Load failures are
    /// logged and produce an empty catalog rather than an error.
    pub fn build_host(mut self) -> Result<ServerHost> {
        let config = self.config.take().unwrap_or_default();
        config.validate()?;

        let catalog = match (self.catalog.take(), self.loader.take()) {
            (Some(catalog), _) => catalog,
            (None, Some(loader)) => ProductCatalog::load_or_empty(loader.as_ref()),
            (None, None) => {
                let loader = CsvCatalogLoader::new(&config.catalog_path);
                tracing::info!(path = %loader.path().display(), "Loading product catalog");
                ProductCatalog::load_or_empty(&loader)
            }
        };

        let fakes = self
            .fakes
            .take()
            .unwrap_or_else(|| Arc::new(FakerSource::new()));

        ServerHost::from_builder_components(config, catalog, fakes)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured `bind_addr` and handles SIGTERM and Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self
            .config
            .as_ref()
            .map(|c| c.bind_addr.clone())
            .unwrap_or_else(|| ServiceConfig::default().bind_addr);

        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
