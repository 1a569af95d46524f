//! Data Transfer Objects (DTOs) for service payloads and views.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Currency DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to add a currency to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateCurrencyPayload {
    /// Unique currency code
    #[schema(example = "USD")]
    pub code: String,
    /// Display name
    #[schema(example = "United States Dollar")]
    pub full_name: String,
    /// Display symbol
    #[schema(example = "$")]
    pub sign: String,
}

/// A currency as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrencyView {
    #[schema(example = "USD")]
    pub code: String,
    #[schema(example = "United States Dollar")]
    pub full_name: String,
    #[schema(example = "$")]
    pub sign: String,
}

/// All currencies, in repository order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CurrencyListView {
    pub items: Vec<CurrencyView>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Exchange DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to add a directed exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreateExchangePayload {
    /// Code of the currency being converted from
    #[schema(example = "USD")]
    pub base: String,
    /// Code of the currency being converted to
    #[schema(example = "CAD")]
    pub target: String,
    /// Units of `target` per one unit of `base`
    #[schema(value_type = String, example = "1.5")]
    pub rate: Decimal,
}

/// Request to replace the rate of an existing exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateExchangePayload {
    #[schema(example = "USD")]
    pub base: String,
    #[schema(example = "CAD")]
    pub target: String,
    #[schema(value_type = String, example = "2")]
    pub rate: Decimal,
}

/// Ordered pair key of an exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct ExchangeCode {
    #[schema(example = "USD")]
    pub base: String,
    #[schema(example = "CAD")]
    pub target: String,
}

impl ExchangeCode {
    pub fn new(base: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            target: target.into(),
        }
    }
}

/// An exchange as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeView {
    pub base: CurrencyView,
    pub target: CurrencyView,
    #[schema(value_type = String, example = "1.5")]
    pub rate: Decimal,
}

/// All exchanges, in repository order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExchangeListView {
    pub items: Vec<ExchangeView>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to convert an amount between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConvertPayload {
    #[schema(example = "USD")]
    pub from: String,
    #[schema(example = "CAD")]
    pub to: String,
    #[schema(value_type = String, example = "10")]
    pub amount: Decimal,
}

/// Result of a conversion.
///
/// `base`/`target` are the requested `from`/`to` currencies and `rate` is the
/// rate that was applied, inverted when only the opposite pair is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConversionView {
    pub base: CurrencyView,
    pub target: CurrencyView,
    #[schema(value_type = String, example = "1.5")]
    pub rate: Decimal,
    #[schema(value_type = String, example = "10")]
    pub amount: Decimal,
    #[schema(value_type = String, example = "15")]
    pub converted_amount: Decimal,
}
