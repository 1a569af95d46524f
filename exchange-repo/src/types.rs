//! Database row types shared by the SQL adapters.
//!
//! Both adapters read rates back as text (`NUMERIC::TEXT` on Postgres) so a
//! single parse path turns rows into domain values.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::FromRow;

use exchange_types::{Currency, Exchange, RepoError};

/// Column list for currency selects.
pub const CURRENCY_COLUMNS: &str = "code, full_name, sign";

/// Select joining an exchange with both of its currencies.
///
/// `rate_column` must yield text. Adapters append `WHERE`/`ORDER BY`.
pub fn exchange_select(rate_column: &str) -> String {
    format!(
        "SELECT b.code AS base_code, b.full_name AS base_full_name, b.sign AS base_sign, \
                t.code AS target_code, t.full_name AS target_full_name, t.sign AS target_sign, \
                {rate_column} AS rate \
         FROM exchanges e \
         JOIN currencies b ON b.id = e.base_currency_id \
         JOIN currencies t ON t.id = e.target_currency_id"
    )
}

/// Currency row from database.
#[derive(FromRow)]
pub struct DbCurrency {
    pub code: String,
    pub full_name: String,
    pub sign: String,
}

impl DbCurrency {
    pub fn into_domain(self) -> Currency {
        Currency::from_parts(self.code, self.full_name, self.sign)
    }
}

/// Exchange row joined with its base and target currencies.
#[derive(FromRow)]
pub struct DbExchange {
    pub base_code: String,
    pub base_full_name: String,
    pub base_sign: String,
    pub target_code: String,
    pub target_full_name: String,
    pub target_sign: String,
    pub rate: String,
}

impl DbExchange {
    pub fn into_domain(self) -> Result<Exchange, RepoError> {
        let rate = Decimal::from_str(&self.rate)
            .map_err(|e| RepoError::Database(format!("invalid stored rate {}: {}", self.rate, e)))?;

        Ok(Exchange::create(
            Currency::from_parts(self.base_code, self.base_full_name, self.base_sign),
            Currency::from_parts(self.target_code, self.target_full_name, self.target_sign),
            rate,
        ))
    }
}

/// Maps a sqlx error, turning unique-constraint violations into conflicts.
pub fn map_write_error(err: sqlx::Error, what: impl FnOnce() -> String) -> RepoError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepoError::Conflict(what()),
        _ => RepoError::Database(err.to_string()),
    }
}
