//! # purchase-gen
//!
//! An HTTP service that serves synthetic purchase records. A product catalog is
//! loaded once from CSV at startup; every request samples a product and merges
//! it with generated client, payment, location and timestamp data.
//!
//! ## Features
//!
//! - **Immutable catalog**: loaded once, shared by `Arc`, never reloaded
//! - **Explicit policies**: sampling range and batch failure handling are configuration
//! - **Typed errors**: each failure maps to a status code and a stable error code
//! - **Pluggable fakes**: swap the `FakeDataSource` for deterministic tests
//! - **Database descriptors**: one type per backend behind `DatabaseBackend`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use purchase_gen::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServiceConfig::from_yaml_file("config.yaml")?;
//!     ServerBuilder::new().with_config(config).serve().await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BatchFailurePolicy, CatalogError, CatalogLoader, CatalogState, ClientPosition,
        CsvCatalogLoader, FakeDataSource, FakerSource, GeneratorSettings, ProductCatalog,
        ProductRecord, PurchaseGenerator, PurchaseRecord, SamplingRange, ServiceError,
        ServiceResult,
    };

    // === Storage ===
    pub use crate::storage::{BackendKind, ConnectionSettings, DatabaseBackend, backend_for};

    // === Config ===
    pub use crate::config::ServiceConfig;

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
}
