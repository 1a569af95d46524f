//! Decimal rate arithmetic.
//!
//! All conversion goes through `rust_decimal::Decimal` so that amounts and
//! rates never pass through binary floating point.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::DomainError;

/// Significant digits kept when inverting a rate (decimal64 context).
pub const INVERSE_PRECISION: u32 = 16;

/// Rounding applied when inverting a rate.
pub const INVERSE_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Converts `amount` of the base currency into the target currency.
pub fn convert(amount: Decimal, rate: Decimal) -> Result<Decimal, DomainError> {
    amount.checked_mul(rate).ok_or(DomainError::Overflow)
}

/// Computes `1 / rate` rounded to [`INVERSE_PRECISION`] significant digits.
pub fn inverse(rate: Decimal) -> Result<Decimal, DomainError> {
    if rate.is_zero() {
        return Err(DomainError::ZeroRate);
    }

    Decimal::ONE
        .checked_div(rate)
        .and_then(|raw| raw.round_sf_with_strategy(INVERSE_PRECISION, INVERSE_ROUNDING))
        .ok_or(DomainError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert_multiplies_exactly() {
        assert_eq!(convert(dec!(10), dec!(1.5)).unwrap(), dec!(15));
        assert_eq!(convert(dec!(0.1), dec!(0.2)).unwrap(), dec!(0.02));
    }

    #[test]
    fn test_convert_overflow() {
        let result = convert(Decimal::MAX, dec!(2));
        assert!(matches!(result, Err(DomainError::Overflow)));
    }

    #[test]
    fn test_inverse_rounds_to_sixteen_digits() {
        assert_eq!(inverse(dec!(1.5)).unwrap(), dec!(0.6666666666666667));
        assert_eq!(inverse(dec!(3)).unwrap(), dec!(0.3333333333333333));
    }

    #[test]
    fn test_inverse_exact_values_unchanged() {
        assert_eq!(inverse(dec!(2)).unwrap(), dec!(0.5));
        assert_eq!(inverse(dec!(0.25)).unwrap(), dec!(4));
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        assert!(matches!(inverse(Decimal::ZERO), Err(DomainError::ZeroRate)));
    }

    #[test]
    fn test_inverse_rounds_to_sixteen_digits_terminating_and_repeating() {
        // 1 / 0.16 = 6.25 exactly; 1 / 7 needs rounding at the 16th digit.
        assert_eq!(inverse(dec!(0.16)).unwrap(), dec!(6.25));
        assert_eq!(inverse(dec!(7)).unwrap(), dec!(0.1428571428571429));
    }

    #[test]
    fn test_inverse_half_even_on_tie() {
        // 1 / 2^23e-23 = 5^23 = 11920928955078125, a 17-digit tie.
        // Half-even keeps the 2; half-up would give ...8130.
        assert_eq!(
            inverse(dec!(0.00000000000000008388608)).unwrap(),
            dec!(11920928955078120)
        );
    }
}
