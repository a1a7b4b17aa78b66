//! HTTP handlers for purchase generation

use crate::core::{PurchaseGenerator, PurchaseRecord, ServiceError};
use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use std::sync::Arc;

/// Greeting returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Jornada de Dados!";

/// Shared state for purchase handlers
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PurchaseGenerator>,
}

/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// GET /gerar_compra
pub async fn generate_purchase(
    State(state): State<AppState>,
) -> Result<Json<PurchaseRecord>, ServiceError> {
    let record = state.generator.generate_one()?;
    Ok(Json(record))
}

/// GET /gerar_compras/{numero_registro}
///
/// The count is taken as text so a non-numeric or out-of-range value gets the
/// same JSON error body as every other failure. Batches run on the blocking
/// pool so a large request does not stall the async workers serving other
/// clients.
pub async fn generate_purchases(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Vec<PurchaseRecord>>, ServiceError> {
    let count: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::MalformedCount { raw: raw.clone() })?;

    let generator = state.generator.clone();
    let records = tokio::task::spawn_blocking(move || generator.generate_many(count))
        .await
        .map_err(|e| ServiceError::Internal(format!("batch task failed: {}", e)))??;

    tracing::debug!(count, returned = records.len(), "Purchases generated");
    Ok(Json(records))
}
