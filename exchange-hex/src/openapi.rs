//! OpenAPI document for the HTTP adapter.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use exchange_types::dto::{
    ConversionView, CreateCurrencyPayload, CreateExchangePayload, CurrencyListView, CurrencyView,
    ExchangeListView, ExchangeView,
};
use utoipa::OpenApi;

use crate::inbound::handlers::{ConvertQuery, UpdateRateRequest};

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Add a currency to the catalog
#[utoipa::path(
    post,
    path = "/api/currencies",
    tag = "currencies",
    request_body = CreateCurrencyPayload,
    responses(
        (status = 201, description = "Currency created", body = CurrencyView),
        (status = 400, description = "Blank field"),
        (status = 409, description = "Currency code already exists")
    )
)]
async fn create_currency() {}

/// List all currencies
#[utoipa::path(
    get,
    path = "/api/currencies",
    tag = "currencies",
    responses(
        (status = 200, description = "All currencies", body = CurrencyListView)
    )
)]
async fn list_currencies() {}

/// Get a currency by code
#[utoipa::path(
    get,
    path = "/api/currencies/{code}",
    tag = "currencies",
    params(
        ("code" = String, Path, description = "Currency code", example = "USD")
    ),
    responses(
        (status = 200, description = "Currency found", body = CurrencyView),
        (status = 404, description = "Currency not found")
    )
)]
async fn get_currency() {}

/// Add a directed exchange rate
#[utoipa::path(
    post,
    path = "/api/exchanges",
    tag = "exchanges",
    request_body = CreateExchangePayload,
    responses(
        (status = 201, description = "Exchange created", body = ExchangeView),
        (status = 400, description = "Non-positive rate or identical currencies"),
        (status = 404, description = "Base or target currency not found"),
        (status = 409, description = "Exchange already exists")
    )
)]
async fn create_exchange() {}

/// List all exchange rates
#[utoipa::path(
    get,
    path = "/api/exchanges",
    tag = "exchanges",
    responses(
        (status = 200, description = "All exchanges", body = ExchangeListView)
    )
)]
async fn list_exchanges() {}

/// Get an exchange rate by pair
#[utoipa::path(
    get,
    path = "/api/exchanges/{base}/{target}",
    tag = "exchanges",
    params(
        ("base" = String, Path, description = "Base currency code", example = "USD"),
        ("target" = String, Path, description = "Target currency code", example = "CAD")
    ),
    responses(
        (status = 200, description = "Exchange found", body = ExchangeView),
        (status = 404, description = "Exchange not found")
    )
)]
async fn get_exchange() {}

/// Replace the rate of an exchange
#[utoipa::path(
    patch,
    path = "/api/exchanges/{base}/{target}",
    tag = "exchanges",
    request_body = UpdateRateRequest,
    params(
        ("base" = String, Path, description = "Base currency code", example = "USD"),
        ("target" = String, Path, description = "Target currency code", example = "CAD")
    ),
    responses(
        (status = 200, description = "Exchange updated", body = ExchangeView),
        (status = 400, description = "Non-positive rate"),
        (status = 404, description = "Exchange not found")
    )
)]
async fn update_exchange() {}

/// Convert an amount using a stored or reversed exchange
#[utoipa::path(
    get,
    path = "/api/convert",
    tag = "exchanges",
    params(ConvertQuery),
    responses(
        (status = 200, description = "Conversion result", body = ConversionView),
        (status = 400, description = "Negative amount"),
        (status = 404, description = "No exchange in either direction")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the Exchange API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exchange API",
        version = "0.1.0",
        description = "Currency catalog and directed exchange rates"
    ),
    paths(
        health,
        create_currency,
        list_currencies,
        get_currency,
        create_exchange,
        list_exchanges,
        get_exchange,
        update_exchange,
        convert,
    ),
    components(schemas(
        CreateCurrencyPayload,
        CurrencyView,
        CurrencyListView,
        CreateExchangePayload,
        UpdateRateRequest,
        ExchangeView,
        ExchangeListView,
        ConversionView,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "currencies", description = "Currency catalog"),
        (name = "exchanges", description = "Exchange rates and conversion")
    )
)]
pub struct ApiDoc;
