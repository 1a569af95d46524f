//! Currency catalog service.

use exchange_types::{
    AppError, CreateCurrencyPayload, Currency, CurrencyListView, CurrencyMapper,
    CurrencyRepository, CurrencyView, CurrencyViewMapper,
};

/// Application service for the currency catalog.
///
/// Enforces uniqueness of currency codes; the entity itself does not.
pub struct CurrencyService<R, M = CurrencyViewMapper>
where
    R: CurrencyRepository,
    M: CurrencyMapper<CurrencyView>,
{
    repo: R,
    mapper: M,
}

impl<R: CurrencyRepository> CurrencyService<R> {
    /// Creates a new currency service projecting into [`CurrencyView`].
    pub fn new(repo: R) -> Self {
        Self::with_mapper(repo, CurrencyViewMapper)
    }
}

impl<R, M> CurrencyService<R, M>
where
    R: CurrencyRepository,
    M: CurrencyMapper<CurrencyView>,
{
    /// Creates a new currency service with a custom mapper.
    pub fn with_mapper(repo: R, mapper: M) -> Self {
        Self { repo, mapper }
    }

    /// Adds a currency to the catalog.
    #[tracing::instrument(skip(self), fields(code = %payload.code))]
    pub async fn create(&self, payload: CreateCurrencyPayload) -> Result<CurrencyView, AppError> {
        if self.repo.fetch_by_code(&payload.code).await?.is_some() {
            return Err(AppError::CurrencyAlreadyExists(payload.code));
        }

        let currency = Currency::create(payload.code, payload.full_name, payload.sign)?;

        self.repo.save(&currency).await?;
        tracing::info!("Currency {} created", currency.code());

        Ok(currency.map(&self.mapper))
    }

    /// Gets a currency by code.
    pub async fn by_code(&self, code: &str) -> Result<CurrencyView, AppError> {
        self.repo
            .fetch_by_code(code)
            .await?
            .map(|currency| currency.map(&self.mapper))
            .ok_or_else(|| AppError::CurrencyNotFound(code.to_string()))
    }

    /// Lists all currencies in repository order.
    pub async fn all(&self) -> Result<CurrencyListView, AppError> {
        let items = self
            .repo
            .fetch_all()
            .await?
            .iter()
            .map(|currency| currency.map(&self.mapper))
            .collect();

        Ok(CurrencyListView { items })
    }
}
