//! Decimal type utilities for precise financial calculations
//!
//! `Decimal` holds 28 significant digits with a maximum magnitude of about
//! 7.9e28. The checked helpers here turn an out-of-range result into
//! [`Error::DecimalError`] instead of a panic.

use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Price type with high precision
pub type Price = Decimal;

/// Quantity type with high precision
pub type Quantity = Decimal;

/// Amount type with high precision (typically Price * Quantity)
pub type Amount = Decimal;

fn overflow(lhs: Decimal, op: &str, rhs: Decimal) -> Error {
    Error::DecimalError(format!("{} {} {} is out of range", lhs, op, rhs))
}

/// Add two decimals, failing on overflow
pub fn checked_add(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| overflow(lhs, "+", rhs))
}

/// Subtract two decimals, failing on overflow
pub fn checked_sub(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| overflow(lhs, "-", rhs))
}

/// Multiply two decimals, failing on overflow
pub fn checked_mul(lhs: Decimal, rhs: Decimal) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow(lhs, "*", rhs))
}

/// Divide `numerator` by `denominator`, yielding zero when the denominator is zero.
///
/// Average prices are defined as zero until volume has traded on that side.
pub fn div_or_zero(numerator: Decimal, denominator: Decimal) -> Result<Decimal> {
    if denominator.is_zero() {
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| overflow(numerator, "/", denominator))
}

/// Precision helpers for presenting values
pub mod precision {
    use super::*;
    
    /// Default price precision (8 decimal places)
    pub const PRICE_PRECISION: u32 = 8;
    
    /// Default quantity precision (8 decimal places)
    pub const QUANTITY_PRECISION: u32 = 8;
    
    /// Round price to standard precision
    pub fn round_price(price: Price) -> Price {
        price.round_dp(PRICE_PRECISION)
    }
    
    /// Round quantity to standard precision
    pub fn round_quantity(qty: Quantity) -> Quantity {
        qty.round_dp(QUANTITY_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_or_zero_guards_zero_denominator() {
        assert_eq!(div_or_zero(dec!(3375), Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(div_or_zero(Decimal::ZERO, Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_div_or_zero_is_exact() {
        assert_eq!(div_or_zero(dec!(3375), dec!(22.5)).unwrap(), dec!(150));
        assert_eq!(div_or_zero(dec!(2620), dec!(16)).unwrap(), dec!(163.75));
        assert_eq!(div_or_zero(dec!(1701.3), dec!(10)).unwrap(), dec!(170.13));
    }

    #[test]
    fn test_div_or_zero_rounds_to_28_digits() {
        assert_eq!(
            div_or_zero(dec!(1), dec!(3)).unwrap(),
            dec!(0.3333333333333333333333333333)
        );
    }

    #[test]
    fn test_checked_helpers_report_overflow() {
        assert!(matches!(checked_mul(Decimal::MAX, dec!(2)), Err(Error::DecimalError(_))));
        assert!(matches!(checked_add(Decimal::MAX, dec!(1)), Err(Error::DecimalError(_))));
        assert!(matches!(checked_sub(Decimal::MIN, dec!(1)), Err(Error::DecimalError(_))));
        assert!(matches!(
            div_or_zero(Decimal::MAX, dec!(0.1)),
            Err(Error::DecimalError(_))
        ));
        assert_eq!(checked_mul(dec!(250), dec!(7.5)).unwrap(), dec!(1875));
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(precision::round_price(dec!(170.123456789)), dec!(170.12345679));
        assert_eq!(precision::round_quantity(dec!(0.000000004)), dec!(0));
    }
}
