//! Exchange rate service.

use rust_decimal::Decimal;

use exchange_types::{
    AppError, ConversionView, ConvertPayload, CreateExchangePayload, Currency,
    CurrencyRepository, CurrencyViewMapper, Exchange, ExchangeCode, ExchangeListView,
    ExchangeMapper, ExchangeRepository, ExchangeView, ExchangeViewMapper, RepoError,
    UpdateExchangePayload,
};

/// Application service for directed exchange rates.
///
/// Enforces pair uniqueness, existence of both currencies on creation and
/// existence of the exchange on update.
pub struct ExchangeService<E, C, M = ExchangeViewMapper>
where
    E: ExchangeRepository,
    C: CurrencyRepository,
    M: ExchangeMapper<ExchangeView>,
{
    exchanges: E,
    currencies: C,
    mapper: M,
}

impl<E, C> ExchangeService<E, C>
where
    E: ExchangeRepository,
    C: CurrencyRepository,
{
    /// Creates a new exchange service projecting into [`ExchangeView`].
    pub fn new(exchanges: E, currencies: C) -> Self {
        Self::with_mapper(exchanges, currencies, ExchangeViewMapper)
    }
}

impl<E, C, M> ExchangeService<E, C, M>
where
    E: ExchangeRepository,
    C: CurrencyRepository,
    M: ExchangeMapper<ExchangeView>,
{
    /// Creates a new exchange service with a custom mapper.
    pub fn with_mapper(exchanges: E, currencies: C, mapper: M) -> Self {
        Self {
            exchanges,
            currencies,
            mapper,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog Operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Adds a directed exchange rate.
    ///
    /// Checks run in order: pair uniqueness, base currency, target currency,
    /// then the rate itself. The first failure wins.
    #[tracing::instrument(skip(self), fields(base = %payload.base, target = %payload.target))]
    pub async fn create(&self, payload: CreateExchangePayload) -> Result<ExchangeView, AppError> {
        if self
            .exchanges
            .fetch_by_code(&payload.base, &payload.target)
            .await?
            .is_some()
        {
            return Err(AppError::ExchangeAlreadyExists {
                base: payload.base,
                target: payload.target,
            });
        }

        let base = self.currency(&payload.base).await?;
        let target = self.currency(&payload.target).await?;

        if base.code() == target.code() {
            return Err(AppError::BadRequest(
                "Base and target currencies must differ".into(),
            ));
        }
        validate_rate(payload.rate)?;

        let exchange = Exchange::create(base, target, payload.rate);

        self.exchanges.save(&exchange).await?;
        tracing::info!(rate = %exchange.rate(), "Exchange created");

        Ok(exchange.map(&self.mapper))
    }

    /// Replaces the rate of an existing exchange.
    #[tracing::instrument(skip(self), fields(base = %payload.base, target = %payload.target))]
    pub async fn update(&self, payload: UpdateExchangePayload) -> Result<ExchangeView, AppError> {
        let exchange = self
            .exchanges
            .fetch_by_code(&payload.base, &payload.target)
            .await?
            .ok_or_else(|| not_found(&payload.base, &payload.target))?;

        validate_rate(payload.rate)?;

        let updated = exchange.updated(payload.rate);

        self.exchanges
            .update(&updated)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => not_found(&payload.base, &payload.target),
                e => e.into(),
            })?;
        tracing::info!(old = %exchange.rate(), new = %updated.rate(), "Exchange rate updated");

        Ok(updated.map(&self.mapper))
    }

    /// Gets an exchange by its ordered pair.
    pub async fn by_code(&self, code: &ExchangeCode) -> Result<ExchangeView, AppError> {
        self.exchanges
            .fetch_by_code(&code.base, &code.target)
            .await?
            .map(|exchange| exchange.map(&self.mapper))
            .ok_or_else(|| not_found(&code.base, &code.target))
    }

    /// Lists all exchanges in repository order.
    pub async fn all(&self) -> Result<ExchangeListView, AppError> {
        let items = self
            .exchanges
            .fetch_all()
            .await?
            .iter()
            .map(|exchange| exchange.map(&self.mapper))
            .collect();

        Ok(ExchangeListView { items })
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts an amount from one currency to another.
    ///
    /// Uses the stored `(from, to)` exchange when present, otherwise the
    /// reversed view of a stored `(to, from)` exchange. No other route is tried.
    #[tracing::instrument(skip(self), fields(from = %payload.from, to = %payload.to))]
    pub async fn convert(&self, payload: ConvertPayload) -> Result<ConversionView, AppError> {
        if payload.amount < Decimal::ZERO {
            return Err(AppError::BadRequest("Amount cannot be negative".into()));
        }

        if let Some(exchange) = self
            .exchanges
            .fetch_by_code(&payload.from, &payload.to)
            .await?
        {
            let converted = exchange.convert(payload.amount)?;
            return Ok(conversion(
                exchange.base(),
                exchange.target(),
                exchange.rate(),
                payload.amount,
                converted,
            ));
        }

        if let Some(exchange) = self
            .exchanges
            .fetch_by_code(&payload.to, &payload.from)
            .await?
        {
            tracing::debug!("Converting through reversed exchange");
            let reversed = exchange.reversed()?;
            let converted = reversed.convert(payload.amount)?;
            return Ok(conversion(
                reversed.target(),
                reversed.base(),
                reversed.rate(),
                payload.amount,
                converted,
            ));
        }

        Err(not_found(&payload.from, &payload.to))
    }

    async fn currency(&self, code: &str) -> Result<Currency, AppError> {
        self.currencies
            .fetch_by_code(code)
            .await?
            .ok_or_else(|| AppError::CurrencyNotFound(code.to_string()))
    }
}

fn validate_rate(rate: Decimal) -> Result<(), AppError> {
    if rate <= Decimal::ZERO {
        return Err(AppError::BadRequest("Rate must be positive".into()));
    }
    Ok(())
}

fn not_found(base: &str, target: &str) -> AppError {
    AppError::ExchangeNotFound {
        base: base.to_string(),
        target: target.to_string(),
    }
}

fn conversion(
    from: &Currency,
    to: &Currency,
    rate: Decimal,
    amount: Decimal,
    converted_amount: Decimal,
) -> ConversionView {
    ConversionView {
        base: from.map(&CurrencyViewMapper),
        target: to.map(&CurrencyViewMapper),
        rate,
        amount,
        converted_amount,
    }
}
