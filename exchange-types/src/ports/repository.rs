//! Repository port traits.
//!
//! Adapters (Memory, SQLite, Postgres) implement these traits. Every adapter
//! must be read-your-writes: a saved entity is visible to the next lookup.

use std::sync::Arc;

use crate::domain::{Currency, Exchange};
use crate::error::RepoError;

/// Storage for the currency catalog.
#[async_trait::async_trait]
pub trait CurrencyRepository: Send + Sync + 'static {
    /// Gets a currency by its code.
    async fn fetch_by_code(&self, code: &str) -> Result<Option<Currency>, RepoError>;

    /// Lists all currencies in the adapter's natural order.
    async fn fetch_all(&self) -> Result<Vec<Currency>, RepoError>;

    /// Stores a new currency.
    async fn save(&self, currency: &Currency) -> Result<(), RepoError>;
}

/// Storage for directed exchange rates, keyed by `(base, target)` code pair.
#[async_trait::async_trait]
pub trait ExchangeRepository: Send + Sync + 'static {
    /// Gets the exchange for the ordered pair.
    async fn fetch_by_code(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Option<Exchange>, RepoError>;

    /// Lists all exchanges in the adapter's natural order.
    async fn fetch_all(&self) -> Result<Vec<Exchange>, RepoError>;

    /// Stores a new exchange.
    async fn save(&self, exchange: &Exchange) -> Result<(), RepoError>;

    /// Replaces the stored exchange with the same pair.
    ///
    /// Returns `RepoError::NotFound` when the pair is not stored.
    async fn update(&self, exchange: &Exchange) -> Result<(), RepoError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared adapters
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl<T: CurrencyRepository + ?Sized> CurrencyRepository for Arc<T> {
    async fn fetch_by_code(&self, code: &str) -> Result<Option<Currency>, RepoError> {
        (**self).fetch_by_code(code).await
    }

    async fn fetch_all(&self) -> Result<Vec<Currency>, RepoError> {
        (**self).fetch_all().await
    }

    async fn save(&self, currency: &Currency) -> Result<(), RepoError> {
        (**self).save(currency).await
    }
}

#[async_trait::async_trait]
impl<T: ExchangeRepository + ?Sized> ExchangeRepository for Arc<T> {
    async fn fetch_by_code(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Option<Exchange>, RepoError> {
        (**self).fetch_by_code(base, target).await
    }

    async fn fetch_all(&self) -> Result<Vec<Exchange>, RepoError> {
        (**self).fetch_all().await
    }

    async fn save(&self, exchange: &Exchange) -> Result<(), RepoError> {
        (**self).save(exchange).await
    }

    async fn update(&self, exchange: &Exchange) -> Result<(), RepoError> {
        (**self).update(exchange).await
    }
}
