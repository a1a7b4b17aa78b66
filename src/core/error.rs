//! Typed errors for purchase generation
//!
//! [`ServiceError`] is what generator operations return and what the REST
//! handlers turn into HTTP responses. Each variant knows its status code and a
//! stable machine-readable code, so clients can match on `code` instead of
//! parsing messages.
//!
//! # Example
//!
//! ```rust,ignore
//! match generator.generate_many(0) {
//!     Err(ServiceError::InvalidCount { count }) => println!("bad count {}", count),
//!     Err(e) => eprintln!("{}", e),
//!     Ok(records) => println!("{} purchases", records.len()),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Errors produced while generating purchases
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The catalog is empty or failed to load at startup
    CatalogUnavailable,

    /// A batch was requested with fewer than one record
    InvalidCount { count: i64 },

    /// The requested count is not an integer that fits in `i64`
    MalformedCount { raw: String },

    /// A batch was requested above the configured ceiling
    BatchTooLarge { count: i64, max: usize },

    /// The sampled position has no product behind it
    SampleIndex { position: usize, len: usize },

    /// Anything that should not happen in normal operation
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::CatalogUnavailable => {
                write!(f, "Product catalog was not loaded correctly")
            }
            ServiceError::InvalidCount { count } => {
                write!(
                    f,
                    "Number of records must be greater than 0 (got {})",
                    count
                )
            }
            ServiceError::MalformedCount { raw } => {
                write!(f, "Number of records must be an integer (got '{}')", raw)
            }
            ServiceError::BatchTooLarge { count, max } => {
                write!(
                    f,
                    "Number of records {} exceeds the maximum of {}",
                    count, max
                )
            }
            ServiceError::SampleIndex { position, len } => {
                write!(
                    f,
                    "Sampled position {} is out of range for a catalog of {} products",
                    position, len
                )
            }
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::CatalogUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::InvalidCount { .. } => StatusCode::BAD_REQUEST,
            ServiceError::MalformedCount { .. } => StatusCode::BAD_REQUEST,
            ServiceError::BatchTooLarge { .. } => StatusCode::BAD_REQUEST,
            ServiceError::SampleIndex { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ServiceError::InvalidCount { .. } => "INVALID_COUNT",
            ServiceError::MalformedCount { .. } => "MALFORMED_COUNT",
            ServiceError::BatchTooLarge { .. } => "BATCH_TOO_LARGE",
            ServiceError::SampleIndex { .. } => "SAMPLE_INDEX_ERROR",
            ServiceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::InvalidCount { count } => Some(serde_json::json!({ "count": count })),
            ServiceError::MalformedCount { raw } => Some(serde_json::json!({ "value": raw })),
            ServiceError::BatchTooLarge { count, max } => {
                Some(serde_json::json!({ "count": count, "max": max }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

/// Result alias for generator operations
pub type ServiceResult<T> = Result<T, ServiceError>;
