//! Configuration loading and management

use crate::core::{BatchFailurePolicy, GeneratorSettings, SamplingRange};
use crate::storage::ConnectionSettings;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete configuration for the purchase generator service
///
/// Every field has a default, so an empty YAML document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// CSV file holding the product catalog
    pub catalog_path: PathBuf,

    /// Store identifier stamped on every purchase
    pub store_id: u32,

    /// Factor applied to catalog prices
    pub markup: f64,

    pub sampling: SamplingRange,

    pub batch_failure: BatchFailurePolicy,

    /// Largest batch `/gerar_compras` will produce
    pub max_batch_size: usize,

    /// Optional database target, validated and logged at startup
    pub database: Option<ConnectionSettings>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        let generator = GeneratorSettings::default();
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            catalog_path: PathBuf::from("data/products.csv"),
            store_id: generator.store_id,
            markup: generator.markup,
            sampling: generator.sampling,
            batch_failure: generator.batch_failure,
            max_batch_size: generator.max_batch_size,
            database: None,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Reject settings the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if !self.markup.is_finite() || self.markup <= 0.0 {
            bail!("markup must be a positive number, got {}", self.markup);
        }
        if self.max_batch_size == 0 {
            bail!("max_batch_size must be at least 1");
        }
        if let Some(db) = &self.database {
            db.kind()?;
        }
        Ok(())
    }

    /// Generator tunables carried by this configuration
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            store_id: self.store_id,
            markup: self.markup,
            sampling: self.sampling,
            batch_failure: self.batch_failure,
            max_batch_size: self.max_batch_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = ServiceConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.store_id, 11);
        assert_eq!(config.markup, 1.2);
        assert_eq!(config.sampling, SamplingRange::SkipFirst);
        assert_eq!(config.batch_failure, BatchFailurePolicy::Sentinel);
    }

    #[test]
    fn test_yaml_serialization() {
        let config = ServiceConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = ServiceConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_rejects_bad_markup() {
        let config = ServiceConfig {
            markup: 0.0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServiceConfig {
            markup: f64::NAN,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_batch() {
        let config = ServiceConfig {
            max_batch_size: 0,
            ..ServiceConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generator_settings_mirror_config() {
        let config = ServiceConfig {
            store_id: 42,
            markup: 1.5,
            sampling: SamplingRange::Full,
            batch_failure: BatchFailurePolicy::Skip,
            max_batch_size: 7,
            ..ServiceConfig::default()
        };
        let settings = config.generator_settings();
        assert_eq!(settings.store_id, 42);
        assert_eq!(settings.markup, 1.5);
        assert_eq!(settings.sampling, SamplingRange::Full);
        assert_eq!(settings.batch_failure, BatchFailurePolicy::Skip);
        assert_eq!(settings.max_batch_size, 7);
    }
}
