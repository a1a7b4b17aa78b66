//! Core module containing the catalog, purchase model and generator

pub mod catalog;
pub mod error;
pub mod faker;
pub mod generator;
pub mod purchase;

pub use catalog::{CatalogError, CatalogLoader, CsvCatalogLoader, ProductCatalog, ProductRecord};
pub use error::{ErrorResponse, ServiceError, ServiceResult};
pub use faker::{FakeDataSource, FakerSource};
pub use generator::{
    BatchFailurePolicy, CatalogState, GeneratorSettings, PurchaseGenerator, SamplingRange,
};
pub use purchase::{ClientPosition, PurchaseRecord};
