use anyhow::Result;
use clap::Parser;
use purchase_gen::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Serve synthetic purchase records sampled from a product catalog
#[derive(Debug, Parser)]
#[command(name = "purchase-gen", version, about)]
struct CliArgs {
    /// YAML configuration file
    #[arg(long, short, env = "PURCHASE_GEN_CONFIG")]
    config: Option<PathBuf>,

    /// Product catalog CSV, overrides `catalog_path`
    #[arg(long, env = "PURCHASE_GEN_CATALOG")]
    catalog: Option<PathBuf>,

    /// Bind address, overrides `bind_addr`
    #[arg(long, env = "PURCHASE_GEN_BIND")]
    bind: Option<String>,
}

impl CliArgs {
    fn into_config(self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_yaml_file(&path.to_string_lossy())?,
            None => ServiceConfig::default(),
        };
        if let Some(catalog) = self.catalog {
            config.catalog_path = catalog;
        }
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = CliArgs::parse().into_config()?;
    tracing::info!(
        bind = %config.bind_addr,
        catalog = %config.catalog_path.display(),
        "Starting purchase-gen"
    );

    ServerBuilder::new().with_config(config).serve().await
}
