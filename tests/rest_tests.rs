//! HTTP-level tests for the purchase routes
//!
//! Requests go through the full router built by `ServerBuilder`:
//! HTTP request → handler → PurchaseGenerator → JSON response.

use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use purchase_gen::prelude::*;
use serde_json::Value;

struct FixedFakes;

impl FakeDataSource for FixedFakes {
    fn name(&self) -> String {
        "Joao Pereira".to_string()
    }
    fn credit_card_provider(&self) -> String {
        "VISA 16 digit".to_string()
    }
    fn location_on_land(&self) -> ClientPosition {
        ClientPosition::new("-23.5475", "-46.63611", "Sao Paulo", "BR", "America/Sao_Paulo")
    }
    fn iso8601(&self) -> String {
        "2010-03-04T05:06:07".to_string()
    }
}

fn catalog(n: usize) -> ProductCatalog {
    ProductCatalog::new(
        (0..n)
            .map(|i| ProductRecord::new(format!("Produto {i}"), 7890000000000 + i as i64, 10.0))
            .collect(),
    )
}

fn make_server_with(catalog: ProductCatalog, config: ServiceConfig) -> TestServer {
    let router = ServerBuilder::new()
        .with_config(config)
        .with_catalog(catalog)
        .with_fake_source(FixedFakes)
        .build()
        .unwrap();
    TestServer::new(router)
}

fn make_server(catalog: ProductCatalog) -> TestServer {
    make_server_with(catalog, ServiceConfig::default())
}

#[tokio::test]
async fn test_root_greets() {
    let server = make_server(catalog(3));

    let response = server.get("/").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Jornada de Dados!");
}

#[tokio::test]
async fn test_root_answers_without_catalog() {
    let server = make_server(ProductCatalog::empty());
    server.get("/").await.assert_status_ok();
}

#[tokio::test]
async fn test_generate_one_shape() {
    let server = make_server(catalog(5));

    let response = server.get("/gerar_compra").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["client"], "Joao Pereira");
    assert_eq!(body["creditcard"], "VISA 16 digit");
    assert_eq!(body["price"], 12.0);
    assert_eq!(body["store"], 11);
    assert_eq!(body["dateTime"], "2010-03-04T05:06:07");
    assert_eq!(body["clientPosition"][2], "Sao Paulo");

    let ean = body["ean"].as_i64().unwrap();
    assert!((7890000000001..=7890000000004).contains(&ean));
}

#[tokio::test]
async fn test_generate_one_empty_catalog_is_500() {
    let server = make_server(ProductCatalog::empty());

    let response = server.get("/gerar_compra").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "CATALOG_UNAVAILABLE");
}

#[tokio::test]
async fn test_generate_one_single_row_catalog_is_500() {
    let server = make_server(catalog(1));

    let response = server.get("/gerar_compra").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["code"], "SAMPLE_INDEX_ERROR");
}

#[tokio::test]
async fn test_generate_many_returns_requested_count() {
    let server = make_server(catalog(10));

    let response = server.get("/gerar_compras/5").await;

    response.assert_status_ok();
    let body: Vec<PurchaseRecord> = response.json();
    assert_eq!(body.len(), 5);
    assert!(body.iter().all(|r| !r.is_sentinel()));
}

#[tokio::test]
async fn test_generate_many_zero_is_400() {
    let server = make_server(catalog(10));

    let response = server.get("/gerar_compras/0").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_COUNT");
    assert_eq!(body["details"]["count"], 0);
}

#[tokio::test]
async fn test_generate_many_negative_is_400_even_without_catalog() {
    let server = make_server(ProductCatalog::empty());

    let response = server.get("/gerar_compras/-2").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_many_non_integer_is_400_with_error_body() {
    let server = make_server(catalog(10));

    let response = server.get("/gerar_compras/cinco").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "MALFORMED_COUNT");
    assert_eq!(body["details"]["value"], "cinco");
}

#[tokio::test]
async fn test_generate_many_overflowing_count_is_400_with_error_body() {
    let server = make_server(catalog(10));

    let response = server.get("/gerar_compras/99999999999999999999").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "MALFORMED_COUNT");
}

#[tokio::test]
async fn test_generate_many_empty_catalog_is_500() {
    let server = make_server(ProductCatalog::empty());

    let response = server.get("/gerar_compras/3").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_generate_many_above_max_is_400() {
    let config = ServiceConfig {
        max_batch_size: 2,
        ..ServiceConfig::default()
    };
    let server = make_server_with(catalog(10), config);

    let response = server.get("/gerar_compras/3").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "BATCH_TOO_LARGE");
}

#[tokio::test]
async fn test_generate_many_sentinels_for_unsampleable_catalog() {
    let server = make_server(catalog(1));

    let response = server.get("/gerar_compras/3").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for item in items {
        assert_eq!(item["product"], "error");
        assert_eq!(item["ean"], 0);
        assert_eq!(item["price"], 0.0);
    }
}

#[tokio::test]
async fn test_generate_many_skip_policy_returns_fewer() {
    let config = ServiceConfig {
        batch_failure: BatchFailurePolicy::Skip,
        ..ServiceConfig::default()
    };
    let server = make_server_with(catalog(1), config);

    let response = server.get("/gerar_compras/3").await;

    response.assert_status_ok();
    let body: Vec<PurchaseRecord> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_health_reports_catalog_state() {
    let server = make_server(catalog(4));
    let body: Value = server.get("/health").await.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog"]["state"], "loaded");
    assert_eq!(body["catalog"]["size"], 4);

    let server = make_server(ProductCatalog::empty());
    let response = server.get("/healthz").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["catalog"]["state"], "unavailable");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = make_server(catalog(3));

    let response = server
        .get("/gerar_compra")
        .add_header(ORIGIN, HeaderValue::from_static("http://example.com"))
        .await;

    response.assert_status_ok();
    let allow_origin = response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("cross-origin response must carry Access-Control-Allow-Origin");
    assert_eq!(allow_origin, "*");
}
