//! Common utility functions for levy calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to a whole currency unit using half-up rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly .5 are rounded away from zero.
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to zero decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use igs_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(10000.4)), dec!(10000));
/// assert_eq!(round_half_up(dec!(10000.5)), dec!(10001));
/// assert_eq!(round_half_up(dec!(-12.5)), dec!(-13)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(12.4));

        assert_eq!(result, dec!(12));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(12.5));

        assert_eq!(result, dec!(13));
    }

    #[test]
    fn round_half_up_rounds_up_above_midpoint() {
        let result = round_half_up(dec!(12.6));

        assert_eq!(result, dec!(13));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-12.5));

        assert_eq!(result, dec!(-13)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_whole_values() {
        let result = round_half_up(dec!(10000));

        assert_eq!(result, dec!(10000));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(dec!(0));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn round_half_up_handles_exact_halves_of_even_amounts() {
        let result = round_half_up(dec!(20000) / dec!(2));

        assert_eq!(result, dec!(10000));
    }
}
