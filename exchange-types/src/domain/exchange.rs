//! Exchange domain model and its reversed view.

use rust_decimal::Decimal;

use super::currency::Currency;
use super::rate;
use crate::error::DomainError;
use crate::mapping::ExchangeMapper;

/// A directed exchange rate from `base` to `target`.
///
/// `rate` is the multiplier turning an amount of `base` into the equivalent
/// amount of `target`. Values are never mutated: a rate change produces a new
/// `Exchange` via [`Exchange::updated`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    base: Currency,
    target: Currency,
    rate: Decimal,
}

impl Exchange {
    /// Creates a new exchange. Pair uniqueness and `base != target` are not
    /// checked here.
    pub fn create(base: Currency, target: Currency, rate: Decimal) -> Self {
        Self { base, target, rate }
    }

    pub fn base(&self) -> &Currency {
        &self.base
    }

    pub fn target(&self) -> &Currency {
        &self.target
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns a copy of this exchange carrying `rate`.
    pub fn updated(&self, rate: Decimal) -> Self {
        Self {
            base: self.base.clone(),
            target: self.target.clone(),
            rate,
        }
    }

    /// Converts an amount of `base` into `target`.
    pub fn convert(&self, amount: Decimal) -> Result<Decimal, DomainError> {
        rate::convert(amount, self.rate)
    }

    /// Builds the reversed view of this exchange.
    pub fn reversed(&self) -> Result<Reversed, DomainError> {
        Reversed::of(self)
    }

    /// Projects this exchange through `mapper`.
    pub fn map<T, M>(&self, mapper: &M) -> T
    where
        M: ExchangeMapper<T> + ?Sized,
    {
        mapper.map(&self.base, &self.target, self.rate)
    }
}

/// Read-only view converting amounts of `target` back into `base`.
///
/// Keeps the labels of the underlying exchange; only the rate is inverted.
/// Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversed {
    base: Currency,
    target: Currency,
    rate: Decimal,
}

impl Reversed {
    pub fn of(exchange: &Exchange) -> Result<Self, DomainError> {
        Ok(Self {
            base: exchange.base.clone(),
            target: exchange.target.clone(),
            rate: rate::inverse(exchange.rate)?,
        })
    }

    pub fn base(&self) -> &Currency {
        &self.base
    }

    pub fn target(&self) -> &Currency {
        &self.target
    }

    /// The inverted rate.
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Converts an amount of `target` into `base`.
    pub fn convert(&self, amount: Decimal) -> Result<Decimal, DomainError> {
        rate::convert(amount, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ExchangeViewMapper;
    use rust_decimal_macros::dec;

    fn usd() -> Currency {
        Currency::create("USD", "United States Dollar", "$").unwrap()
    }

    fn cad() -> Currency {
        Currency::create("CAD", "Canadian Dollar", "C$").unwrap()
    }

    #[test]
    fn test_forward_conversion() {
        let exchange = Exchange::create(usd(), cad(), dec!(1.5));
        assert_eq!(exchange.convert(dec!(10)).unwrap(), dec!(15));
    }

    #[test]
    fn test_updated_replaces_rate_only() {
        let exchange = Exchange::create(usd(), cad(), dec!(1.5));
        let updated = exchange.updated(dec!(2));

        assert_eq!(updated.rate(), dec!(2));
        assert_eq!(updated.base(), exchange.base());
        assert_eq!(updated.target(), exchange.target());
        assert_eq!(exchange.rate(), dec!(1.5));
    }

    #[test]
    fn test_reversed_converts_by_inverse_rate() {
        let amount = dec!(10);
        let rate = dec!(1.5);
        let reversed = Reversed::of(&Exchange::create(usd(), cad(), rate)).unwrap();

        let expected = amount * dec!(0.6666666666666667);
        assert_eq!(reversed.convert(amount).unwrap(), expected);
        assert_eq!(reversed.base().code(), "USD");
        assert_eq!(reversed.target().code(), "CAD");
    }

    #[test]
    fn test_round_trip_within_precision() {
        let tolerance = dec!(0.000000000001);
        let amounts = [dec!(10), dec!(0.01), dec!(12345.678), dec!(1)];
        let rates = [dec!(1.5), dec!(0.0072), dec!(83.12), dec!(3), dec!(1)];

        for rate in rates {
            let exchange = Exchange::create(usd(), cad(), rate);
            let reversed = exchange.reversed().unwrap();
            for amount in amounts {
                let there = exchange.convert(amount).unwrap();
                let back = reversed.convert(there).unwrap();
                assert!(
                    (back - amount).abs() <= tolerance * amount.max(Decimal::ONE),
                    "rate {} amount {} came back as {}",
                    rate,
                    amount,
                    back
                );
            }
        }
    }

    #[test]
    fn test_scenario_usd_cad() {
        let exchange = Exchange::create(usd(), cad(), dec!(1.5));
        let forward = exchange.convert(dec!(10)).unwrap();
        assert_eq!(forward, dec!(15));

        let back = exchange.reversed().unwrap().convert(forward).unwrap();
        assert!((back - dec!(10)).abs() < dec!(0.000000000001));
    }

    #[test]
    fn test_reversed_zero_rate_fails() {
        let exchange = Exchange::create(usd(), cad(), Decimal::ZERO);
        assert!(matches!(exchange.reversed(), Err(DomainError::ZeroRate)));
    }

    #[test]
    fn test_map_to_view() {
        let view = Exchange::create(usd(), cad(), dec!(1.5)).map(&ExchangeViewMapper);
        assert_eq!(view.base.code, "USD");
        assert_eq!(view.target.full_name, "Canadian Dollar");
        assert_eq!(view.rate, dec!(1.5));
    }
}
