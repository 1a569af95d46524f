//! Projection capabilities for domain entities.
//!
//! Entities expose their raw fields only through these traits, which keeps
//! them independent of any output format. Any closure with the matching
//! signature is a mapper too.

use rust_decimal::Decimal;

use crate::domain::Currency;
use crate::dto::{CurrencyView, ExchangeView};

/// Produces a `T` from a currency's `(code, full_name, sign)`.
pub trait CurrencyMapper<T> {
    fn map(&self, code: &str, full_name: &str, sign: &str) -> T;
}

/// Produces a `T` from an exchange's `(base, target, rate)`.
pub trait ExchangeMapper<T> {
    fn map(&self, base: &Currency, target: &Currency, rate: Decimal) -> T;
}

impl<T, F> CurrencyMapper<T> for F
where
    F: Fn(&str, &str, &str) -> T,
{
    fn map(&self, code: &str, full_name: &str, sign: &str) -> T {
        self(code, full_name, sign)
    }
}

impl<T, F> ExchangeMapper<T> for F
where
    F: Fn(&Currency, &Currency, Decimal) -> T,
{
    fn map(&self, base: &Currency, target: &Currency, rate: Decimal) -> T {
        self(base, target, rate)
    }
}

/// Maps a currency to its [`CurrencyView`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyViewMapper;

impl CurrencyMapper<CurrencyView> for CurrencyViewMapper {
    fn map(&self, code: &str, full_name: &str, sign: &str) -> CurrencyView {
        CurrencyView {
            code: code.to_string(),
            full_name: full_name.to_string(),
            sign: sign.to_string(),
        }
    }
}

/// Maps a currency to its bare code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyCodeMapper;

impl CurrencyMapper<String> for CurrencyCodeMapper {
    fn map(&self, code: &str, _full_name: &str, _sign: &str) -> String {
        code.to_string()
    }
}

/// Maps an exchange to its [`ExchangeView`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExchangeViewMapper;

impl ExchangeMapper<ExchangeView> for ExchangeViewMapper {
    fn map(&self, base: &Currency, target: &Currency, rate: Decimal) -> ExchangeView {
        ExchangeView {
            base: base.map(&CurrencyViewMapper),
            target: target.map(&CurrencyViewMapper),
            rate,
        }
    }
}
