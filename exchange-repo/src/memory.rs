//! In-memory repository adapter.
//!
//! Keeps currencies and exchanges in insertion order. Uniqueness is checked
//! under the write lock, so concurrent duplicate saves surface as
//! `RepoError::Conflict` just like the SQL adapters.

use async_trait::async_trait;
use tokio::sync::RwLock;

use exchange_types::{Currency, CurrencyRepository, Exchange, ExchangeRepository, RepoError};

/// In-memory repository, mainly for development and tests.
#[derive(Default)]
pub struct MemoryRepo {
    currencies: RwLock<Vec<Currency>>,
    exchanges: RwLock<Vec<Exchange>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

fn is_pair(exchange: &Exchange, base: &str, target: &str) -> bool {
    exchange.base().code() == base && exchange.target().code() == target
}

#[async_trait]
impl CurrencyRepository for MemoryRepo {
    async fn fetch_by_code(&self, code: &str) -> Result<Option<Currency>, RepoError> {
        let currencies = self.currencies.read().await;
        Ok(currencies.iter().find(|c| c.code() == code).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<Currency>, RepoError> {
        Ok(self.currencies.read().await.clone())
    }

    async fn save(&self, currency: &Currency) -> Result<(), RepoError> {
        let mut currencies = self.currencies.write().await;
        if currencies.iter().any(|c| c.code() == currency.code()) {
            return Err(RepoError::Conflict(format!(
                "currency {} already stored",
                currency.code()
            )));
        }
        currencies.push(currency.clone());
        Ok(())
    }
}

#[async_trait]
impl ExchangeRepository for MemoryRepo {
    async fn fetch_by_code(
        &self,
        base: &str,
        target: &str,
    ) -> Result<Option<Exchange>, RepoError> {
        let exchanges = self.exchanges.read().await;
        Ok(exchanges.iter().find(|e| is_pair(e, base, target)).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<Exchange>, RepoError> {
        Ok(self.exchanges.read().await.clone())
    }

    async fn save(&self, exchange: &Exchange) -> Result<(), RepoError> {
        let (base, target) = (exchange.base().code(), exchange.target().code());

        let mut exchanges = self.exchanges.write().await;
        if exchanges.iter().any(|e| is_pair(e, base, target)) {
            return Err(RepoError::Conflict(format!(
                "exchange {} -> {} already stored",
                base, target
            )));
        }
        exchanges.push(exchange.clone());
        Ok(())
    }

    async fn update(&self, exchange: &Exchange) -> Result<(), RepoError> {
        let (base, target) = (exchange.base().code(), exchange.target().code());

        let mut exchanges = self.exchanges.write().await;
        let slot = exchanges
            .iter_mut()
            .find(|e| is_pair(e, base, target))
            .ok_or(RepoError::NotFound)?;
        *slot = exchange.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd() -> Currency {
        Currency::create("USD", "United States Dollar", "$").unwrap()
    }

    fn cad() -> Currency {
        Currency::create("CAD", "Canadian Dollar", "C$").unwrap()
    }

    #[tokio::test]
    async fn test_currency_read_your_writes() {
        let repo = MemoryRepo::new();

        CurrencyRepository::save(&repo, &usd()).await.unwrap();
        CurrencyRepository::save(&repo, &cad()).await.unwrap();

        let fetched = CurrencyRepository::fetch_by_code(&repo, "CAD").await.unwrap();
        assert_eq!(fetched, Some(cad()));

        let all = CurrencyRepository::fetch_all(&repo).await.unwrap();
        assert_eq!(all, vec![usd(), cad()]);
    }

    #[tokio::test]
    async fn test_duplicate_currency_conflicts() {
        let repo = MemoryRepo::new();

        CurrencyRepository::save(&repo, &usd()).await.unwrap();
        let result = CurrencyRepository::save(&repo, &usd()).await;

        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_exchange_update_replaces_by_pair() {
        let repo = MemoryRepo::new();
        let exchange = Exchange::create(usd(), cad(), dec!(1.5));

        ExchangeRepository::save(&repo, &exchange).await.unwrap();
        ExchangeRepository::update(&repo, &exchange.updated(dec!(2)))
            .await
            .unwrap();

        let fetched = ExchangeRepository::fetch_by_code(&repo, "USD", "CAD")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.rate(), dec!(2));
        assert_eq!(ExchangeRepository::fetch_all(&repo).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exchange_update_missing_pair() {
        let repo = MemoryRepo::new();
        let exchange = Exchange::create(usd(), cad(), dec!(1.5));

        let result = ExchangeRepository::update(&repo, &exchange).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_exchange_pair_is_ordered() {
        let repo = MemoryRepo::new();

        ExchangeRepository::save(&repo, &Exchange::create(usd(), cad(), dec!(1.5)))
            .await
            .unwrap();
        ExchangeRepository::save(&repo, &Exchange::create(cad(), usd(), dec!(0.7)))
            .await
            .unwrap();

        assert!(
            ExchangeRepository::fetch_by_code(&repo, "CAD", "USD")
                .await
                .unwrap()
                .is_some()
        );
        let result =
            ExchangeRepository::save(&repo, &Exchange::create(usd(), cad(), dec!(3))).await;
        assert!(matches!(result, Err(RepoError::Conflict(_))));
    }
}
