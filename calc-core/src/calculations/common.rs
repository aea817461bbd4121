//! Rounding shared by the monetary calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to cents using half-up rounding.
///
/// Values at exactly half a cent are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(157.2300)), dec!(157.23));
/// assert_eq!(round_half_up(dec!(113.845)), dec!(113.85));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(228.6792)), dec!(228.68));
        assert_eq!(round_half_up(dec!(396.3132)), dec!(396.31));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(876.96)), dec!(876.96));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(Decimal::ZERO), dec!(0.00));
    }
}
