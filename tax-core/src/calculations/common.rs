//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the regime
//! calculations and their consumers, including rounding and rate helpers.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `tax` as a percentage of `income`.
///
/// An income of zero yields a rate of zero rather than a division error.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::effective_rate;
///
/// assert_eq!(effective_rate(dec!(5200), dec!(400000)), dec!(1.3));
/// assert_eq!(effective_rate(dec!(0), dec!(0)), Decimal::ZERO);
/// ```
pub fn effective_rate(
    tax: Decimal,
    income: Decimal,
) -> Decimal {
    if income.is_zero() {
        return Decimal::ZERO;
    }
    (tax / income * Decimal::ONE_HUNDRED).normalize()
}
