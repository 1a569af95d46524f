//! HTTP API integration tests.
//!
//! Drive the router in-process against the in-memory repository.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;

use exchange_hex::inbound::HttpServer;
use exchange_repo::MemoryRepo;
use exchange_types::{ConversionView, CurrencyListView, CurrencyView, ExchangeListView, ExchangeView};

fn app() -> Router {
    HttpServer::new(MemoryRepo::new()).router()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

async fn seed(app: &Router) {
    for (code, full_name, sign) in [
        ("USD", "United States Dollar", "$"),
        ("CAD", "Canadian Dollar", "C$"),
    ] {
        let (status, _) = send(
            app,
            "POST",
            "/api/currencies",
            Some(json!({ "code": code, "full_name": full_name, "sign": sign })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, _) = send(
        app,
        "POST",
        "/api/exchanges",
        Some(json!({ "base": "USD", "target": "CAD", "rate": "1.5" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_health() {
    let app = app();

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<Value>(&body)["status"], "healthy");
}

#[tokio::test]
async fn test_create_and_get_currency() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/currencies",
        Some(json!({ "code": "USD", "full_name": "United States Dollar", "sign": "$" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: CurrencyView = parse(&body);
    assert_eq!(created.code, "USD");

    let (status, body) = send(&app, "GET", "/api/currencies/USD", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<CurrencyView>(&body), created);
}

#[tokio::test]
async fn test_duplicate_currency_is_conflict() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/currencies",
        Some(json!({ "code": "USD", "full_name": "US Dollar", "sign": "US$" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(parse::<Value>(&body)["code"], 409);
}

#[tokio::test]
async fn test_blank_currency_field_is_bad_request() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/currencies",
        Some(json!({ "code": "USD", "full_name": "", "sign": "$" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_currency_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/currencies/XYZ", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse::<Value>(&body)["code"], 404);
}

#[tokio::test]
async fn test_list_currencies() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, "GET", "/api/currencies", None).await;

    assert_eq!(status, StatusCode::OK);
    let list: CurrencyListView = parse(&body);
    assert_eq!(list.items.len(), 2);
}

#[tokio::test]
async fn test_create_exchange_and_fetch_by_pair() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, "GET", "/api/exchanges/USD/CAD", None).await;
    assert_eq!(status, StatusCode::OK);
    let exchange: ExchangeView = parse(&body);
    assert_eq!(exchange.base.code, "USD");
    assert_eq!(exchange.target.code, "CAD");
    assert_eq!(exchange.rate, dec!(1.5));

    let (status, _) = send(&app, "GET", "/api/exchanges/CAD/USD", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_exchange_is_conflict() {
    let app = app();
    seed(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/exchanges",
        Some(json!({ "base": "USD", "target": "CAD", "rate": "2" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_exchange_with_unknown_currency_is_not_found() {
    let app = app();
    seed(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/exchanges",
        Some(json!({ "base": "USD", "target": "EUR", "rate": "0.9" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_positive_rate_is_bad_request() {
    let app = app();
    seed(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/exchanges",
        Some(json!({ "base": "CAD", "target": "USD", "rate": "0" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_exchange_rate() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(
        &app,
        "PATCH",
        "/api/exchanges/USD/CAD",
        Some(json!({ "rate": "2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<ExchangeView>(&body).rate, dec!(2));

    let (_, body) = send(&app, "GET", "/api/exchanges", None).await;
    let list: ExchangeListView = parse(&body);
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].rate, dec!(2));
}

#[tokio::test]
async fn test_update_missing_exchange_is_not_found() {
    let app = app();
    seed(&app).await;

    let (status, _) = send(
        &app,
        "PATCH",
        "/api/exchanges/CAD/USD",
        Some(json!({ "rate": "0.7" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_convert_direct() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, "GET", "/api/convert?from=USD&to=CAD&amount=10", None).await;

    assert_eq!(status, StatusCode::OK);
    let conversion: ConversionView = parse(&body);
    assert_eq!(conversion.rate, dec!(1.5));
    assert_eq!(conversion.converted_amount, dec!(15));
}

#[tokio::test]
async fn test_convert_uses_reversed_exchange() {
    let app = app();
    seed(&app).await;

    let (status, body) = send(&app, "GET", "/api/convert?from=CAD&to=USD&amount=3", None).await;

    assert_eq!(status, StatusCode::OK);
    let conversion: ConversionView = parse(&body);
    assert_eq!(conversion.base.code, "CAD");
    assert_eq!(conversion.target.code, "USD");
    assert_eq!(conversion.rate, dec!(0.6666666666666667));
    assert_eq!(conversion.converted_amount, dec!(2.0000000000000001));
}

#[tokio::test]
async fn test_convert_without_exchange_is_not_found() {
    let app = app();
    seed(&app).await;

    let (status, _) = send(&app, "GET", "/api/convert?from=USD&to=EUR&amount=1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let doc: Value = parse(&body);
    assert!(doc["paths"]["/api/convert"].is_object());
}
