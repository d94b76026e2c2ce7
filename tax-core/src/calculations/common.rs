//! Small decimal helpers shared by the tax engine and report code.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(4750.004)), dec!(4750.00));
/// assert_eq!(round_half_up(dec!(0.005)), dec!(0.01));
/// assert_eq!(round_half_up(dec!(-6750.125)), dec!(-6750.13));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the larger of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-8000), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(12000), dec!(0)), dec!(12000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the smaller of two decimal values, preferring `a` on a tie.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if b < a { b } else { a }
}
