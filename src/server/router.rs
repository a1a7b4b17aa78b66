//! Router builder for purchase routes

use crate::server::handlers::{AppState, generate_purchase, generate_purchases, welcome};
use axum::{Router, routing::get};

/// Build the purchase routes
///
/// - GET / - Welcome message
/// - GET /gerar_compra - One synthetic purchase
/// - GET /gerar_compras/{numero_registro} - A batch of synthetic purchases
pub fn build_purchase_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/gerar_compra", get(generate_purchase))
        .route("/gerar_compras/{numero_registro}", get(generate_purchases))
        .with_state(state)
}
