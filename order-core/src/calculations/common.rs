//! Shared rounding helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use order_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(10.005)), dec!(10.01));
/// assert_eq!(round_half_up(dec!(-10.005)), dec!(-10.01));
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
    fn rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(65.004)), dec!(65.00));
    }

    #[test]
    fn rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(1.155)), dec!(1.16));
    }

    #[test]
    fn negative_midpoint_rounds_away_from_zero() {
        assert_eq!(round_half_up(dec!(-1.155)), dec!(-1.16));
    }

    #[test]
    fn leaves_whole_numbers_alone() {
        assert_eq!(round_half_up(dec!(110)), dec!(110));
    }
}
