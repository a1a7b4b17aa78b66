//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the purchase
//! routes, health routes, request tracing and CORS.

use super::super::host::ServerHost;
use crate::core::PurchaseGenerator;
use crate::server::handlers::AppState;
use crate::server::router::build_purchase_routes;
use anyhow::Result;
use axum::extract::State;
use axum::http::{Method, header::CONTENT_TYPE};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - Health check routes
    /// - Purchase routes
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let state = AppState {
            generator: host.generator.clone(),
        };

        let app = Self::health_routes(host.generator.clone()).merge(build_purchase_routes(state));

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
            .max_age(Duration::from_secs(60 * 60));

        Ok(app.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        ))
    }

    fn health_routes(generator: Arc<PurchaseGenerator>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .with_state(generator)
    }

    /// Health check endpoint handler
    ///
    /// Always answers 200; an unavailable catalog is reported in the body.
    async fn health_check(State(generator): State<Arc<PurchaseGenerator>>) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "purchase-gen",
            "catalog": generator.state(),
        }))
    }
}
