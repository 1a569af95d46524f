//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use exchange_types::{
    AppError, ConvertPayload, CreateCurrencyPayload, CreateExchangePayload, CurrencyRepository,
    ExchangeCode, ExchangeRepository, UpdateExchangePayload,
};

use crate::{CurrencyService, ExchangeService};

/// Application state shared across handlers.
///
/// One repository instance backs both services.
pub struct AppState<R>
where
    R: CurrencyRepository + ExchangeRepository,
{
    pub currencies: CurrencyService<Arc<R>>,
    pub exchanges: ExchangeService<Arc<R>, Arc<R>>,
}

impl<R> AppState<R>
where
    R: CurrencyRepository + ExchangeRepository,
{
    pub fn new(repo: R) -> Self {
        let repo = Arc::new(repo);
        Self {
            currencies: CurrencyService::new(repo.clone()),
            exchanges: ExchangeService::new(repo.clone(), repo),
        }
    }
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::CurrencyAlreadyExists(_)
            | AppError::ExchangeAlreadyExists { .. }
            | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::CurrencyNotFound(_) | AppError::ExchangeNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Body of a rate update; the pair comes from the path.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRateRequest {
    #[schema(value_type = String, example = "2")]
    pub rate: Decimal,
}

/// Query string of a conversion request.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Code of the currency to convert from
    pub from: String,
    /// Code of the currency to convert to
    pub to: String,
    /// Amount of `from` to convert
    #[param(value_type = String)]
    pub amount: Decimal,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Currencies
// ─────────────────────────────────────────────────────────────────────────────

/// Add a currency.
#[tracing::instrument(skip(state))]
pub async fn create_currency<R>(
    State(state): State<Arc<AppState<R>>>,
    Json(payload): Json<CreateCurrencyPayload>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let currency = state.currencies.create(payload).await?;
    Ok((StatusCode::CREATED, Json(currency)))
}

/// List all currencies.
#[tracing::instrument(skip(state))]
pub async fn list_currencies<R>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let currencies = state.currencies.all().await?;
    Ok(Json(currencies))
}

/// Get a currency by code.
#[tracing::instrument(skip(state), fields(code = %code))]
pub async fn get_currency<R>(
    State(state): State<Arc<AppState<R>>>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let currency = state.currencies.by_code(&code).await?;
    Ok(Json(currency))
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchanges
// ─────────────────────────────────────────────────────────────────────────────

/// Add an exchange rate.
#[tracing::instrument(skip(state))]
pub async fn create_exchange<R>(
    State(state): State<Arc<AppState<R>>>,
    Json(payload): Json<CreateExchangePayload>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let exchange = state.exchanges.create(payload).await?;
    Ok((StatusCode::CREATED, Json(exchange)))
}

/// List all exchange rates.
#[tracing::instrument(skip(state))]
pub async fn list_exchanges<R>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let exchanges = state.exchanges.all().await?;
    Ok(Json(exchanges))
}

/// Get an exchange rate by pair.
#[tracing::instrument(skip(state), fields(base = %base, target = %target))]
pub async fn get_exchange<R>(
    State(state): State<Arc<AppState<R>>>,
    Path((base, target)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let exchange = state
        .exchanges
        .by_code(&ExchangeCode::new(base, target))
        .await?;
    Ok(Json(exchange))
}

/// Replace the rate of an exchange.
#[tracing::instrument(skip(state), fields(base = %base, target = %target, rate = %req.rate))]
pub async fn update_exchange<R>(
    State(state): State<Arc<AppState<R>>>,
    Path((base, target)): Path<(String, String)>,
    Json(req): Json<UpdateRateRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let exchange = state
        .exchanges
        .update(UpdateExchangePayload {
            base,
            target,
            rate: req.rate,
        })
        .await?;
    Ok(Json(exchange))
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state), fields(from = %query.from, to = %query.to, amount = %query.amount))]
pub async fn convert<R>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<ConvertQuery>,
) -> Result<impl IntoResponse, ApiError>
where
    R: CurrencyRepository + ExchangeRepository,
{
    let conversion = state
        .exchanges
        .convert(ConvertPayload {
            from: query.from,
            to: query.to,
            amount: query.amount,
        })
        .await?;
    Ok(Json(conversion))
}
