//! Product catalog loading and lookup
//!
//! The catalog is read once at startup and never mutated afterwards. Rows are
//! addressed by zero-based position internally; the 1-based `index` exposed by
//! [`ProductCatalog::indexed`] matches the numbering the CSV rows are given on load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single product row from the catalog source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "Product Name")]
    pub name: String,

    /// EAN-like product code
    #[serde(rename = "EAN")]
    pub identifier: i64,

    #[serde(rename = "Price")]
    pub price: f64,
}

impl ProductRecord {
    pub fn new(name: impl Into<String>, identifier: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            identifier,
            price,
        }
    }
}

/// Errors raised while loading or querying the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog row at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("unknown catalog column '{0}'")]
    UnknownColumn(String),
}

/// Source of a product catalog
///
/// Implementations are consulted exactly once, when the service is built.
pub trait CatalogLoader: Send + Sync {
    fn load(&self) -> Result<ProductCatalog, CatalogError>;
}

/// Loads a headered CSV with `Product Name`, `EAN` and `Price` columns
#[derive(Debug, Clone)]
pub struct CsvCatalogLoader {
    path: PathBuf,
}

impl CsvCatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogLoader for CsvCatalogLoader {
    fn load(&self) -> Result<ProductCatalog, CatalogError> {
        let file = std::fs::File::open(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CatalogError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                CatalogError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

        let mut products = Vec::new();
        for row in reader.deserialize::<ProductRecord>() {
            let product = row.map_err(|e| CatalogError::Parse {
                line: e.position().map(|p| p.line()).unwrap_or(0),
                message: e.to_string(),
            })?;
            products.push(product);
        }

        Ok(ProductCatalog::new(products))
    }
}

/// Column selector for [`ProductCatalog::filter_by`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Identifier,
    Price,
}

impl std::str::FromStr for ProductField {
    type Err = CatalogError;

    /// Accepts both the CSV header names and the field names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Product Name" | "name" => Ok(Self::Name),
            "EAN" | "identifier" | "ean" => Ok(Self::Identifier),
            "Price" | "price" => Ok(Self::Price),
            other => Err(CatalogError::UnknownColumn(other.to_string())),
        }
    }
}

/// Immutable, ordered product catalog
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<ProductRecord>,
}

impl ProductCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Run the loader, falling back to an empty catalog on failure
    ///
    /// A failed load is logged and leaves the service able to start; requests
    /// that need products then report the catalog as unavailable.
    pub fn load_or_empty(loader: &dyn CatalogLoader) -> Self {
        match loader.load() {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "Product catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load product catalog, serving without products");
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Row at a zero-based position
    pub fn get(&self, position: usize) -> Option<&ProductRecord> {
        self.products.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.products.iter()
    }

    /// Rows paired with their 1-based catalog index
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &ProductRecord)> {
        self.products.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn contains_identifier(&self, identifier: i64) -> bool {
        self.products.iter().any(|p| p.identifier == identifier)
    }

    /// Rows whose `field` equals `value`
    ///
    /// Numeric columns compare after parsing `value`; a value that does not
    /// parse matches nothing.
    pub fn filter_by(&self, field: &str, value: &str) -> Result<Vec<&ProductRecord>, CatalogError> {
        let field: ProductField = field.parse()?;
        let value = value.trim();

        let matches = match field {
            ProductField::Name => self.products.iter().filter(|p| p.name == value).collect(),
            ProductField::Identifier => match value.parse::<i64>() {
                Ok(ean) => self.products.iter().filter(|p| p.identifier == ean).collect(),
                Err(_) => Vec::new(),
            },
            ProductField::Price => match value.parse::<f64>() {
                Ok(price) => self.products.iter().filter(|p| p.price == price).collect(),
                Err(_) => Vec::new(),
            },
        };

        Ok(matches)
    }
}
