//! # Exchange Client SDK
//!
//! A typed Rust client for the Exchange API.

use exchange_types::{
    ConversionView, CreateCurrencyPayload, CreateExchangePayload, CurrencyListView, CurrencyView,
    Decimal, ExchangeListView, ExchangeView,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Exchange API client.
pub struct ExchangeClient {
    base_url: String,
    http: Client,
}

impl ExchangeClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Currencies
    // ─────────────────────────────────────────────────────────────────────

    /// Adds a currency to the catalog.
    pub async fn create_currency(
        &self,
        code: &str,
        full_name: &str,
        sign: &str,
    ) -> Result<CurrencyView, ClientError> {
        let req = CreateCurrencyPayload {
            code: code.to_string(),
            full_name: full_name.to_string(),
            sign: sign.to_string(),
        };
        self.send(self.http.post(self.url("/api/currencies")).json(&req))
            .await
    }

    /// Gets a currency by code.
    pub async fn get_currency(&self, code: &str) -> Result<CurrencyView, ClientError> {
        self.send(self.http.get(self.url(&format!("/api/currencies/{}", code))))
            .await
    }

    /// Lists all currencies.
    pub async fn list_currencies(&self) -> Result<CurrencyListView, ClientError> {
        self.send(self.http.get(self.url("/api/currencies"))).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Exchanges
    // ─────────────────────────────────────────────────────────────────────

    /// Adds a directed exchange rate.
    pub async fn create_exchange(
        &self,
        base: &str,
        target: &str,
        rate: Decimal,
    ) -> Result<ExchangeView, ClientError> {
        let req = CreateExchangePayload {
            base: base.to_string(),
            target: target.to_string(),
            rate,
        };
        self.send(self.http.post(self.url("/api/exchanges")).json(&req))
            .await
    }

    /// Replaces the rate of an existing exchange.
    pub async fn update_exchange(
        &self,
        base: &str,
        target: &str,
        rate: Decimal,
    ) -> Result<ExchangeView, ClientError> {
        let body = serde_json::json!({ "rate": rate });
        self.send(
            self.http
                .patch(self.url(&pair_path(base, target)))
                .json(&body),
        )
        .await
    }

    /// Gets an exchange by its ordered pair.
    pub async fn get_exchange(&self, base: &str, target: &str) -> Result<ExchangeView, ClientError> {
        self.send(self.http.get(self.url(&pair_path(base, target))))
            .await
    }

    /// Lists all exchanges.
    pub async fn list_exchanges(&self) -> Result<ExchangeListView, ClientError> {
        self.send(self.http.get(self.url("/api/exchanges"))).await
    }

    /// Converts `amount` of `from` into `to`.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<ConversionView, ClientError> {
        let amount = amount.to_string();
        self.send(
            self.http
                .get(self.url("/api/convert"))
                .query(&[("from", from), ("to", to), ("amount", amount.as_str())]),
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let resp = req.send().await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body),
            })
        }
    }
}

fn pair_path(base: &str, target: &str) -> String {
    format!("/api/exchanges/{}/{}", base, target)
}

/// Pulls the `error` field out of an error body, falling back to the raw text.
fn error_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ExchangeClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = ExchangeClient::new("http://localhost:3000/");
        assert_eq!(client.url("/api/currencies"), "http://localhost:3000/api/currencies");
    }

    #[test]
    fn test_pair_path() {
        assert_eq!(pair_path("USD", "CAD"), "/api/exchanges/USD/CAD");
    }

    #[test]
    fn test_error_message_from_json_body() {
        let body = r#"{"error":"Currency not found: XYZ","code":404}"#.to_string();
        assert_eq!(error_message(body), "Currency not found: XYZ");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("bad gateway".to_string()), "bad gateway");
    }

    #[test]
    fn test_api_error_status() {
        let err = ClientError::Api {
            status: 409,
            message: "exists".to_string(),
        };
        assert_eq!(err.status(), Some(409));
    }
}
