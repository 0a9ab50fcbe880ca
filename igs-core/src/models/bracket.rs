use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the IGS schedule.
///
/// Bounds are inclusive on both ends. The reduced-rate amount is never
/// stored; it is derived from `standard_amount` at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgsBracket {
    pub tax_class: u8,
    pub min_revenue: Decimal,
    pub max_revenue: Decimal,
    pub standard_amount: Decimal,
}

impl IgsBracket {
    /// Human-readable revenue range, derived from the bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use igs_core::IgsBracket;
    ///
    /// let bracket = IgsBracket {
    ///     tax_class: 2,
    ///     min_revenue: dec!(500000),
    ///     max_revenue: dec!(999999),
    ///     standard_amount: dec!(30000),
    /// };
    ///
    /// assert_eq!(bracket.range_label(), "de 500 000 à 999 999");
    /// ```
    pub fn range_label(&self) -> String {
        format!(
            "de {} à {}",
            group_thousands(self.min_revenue),
            group_thousands(self.max_revenue)
        )
    }
}

/// Formats the whole part of a non-negative amount with space-separated
/// thousands groups, the way revenue ranges are printed in the source
/// schedules.
fn group_thousands(value: Decimal) -> String {
    let digits = value.trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn group_thousands_leaves_short_values_alone() {
        assert_eq!(group_thousands(dec!(0)), "0");
        assert_eq!(group_thousands(dec!(999)), "999");
    }

    #[test]
    fn group_thousands_separates_groups_of_three() {
        assert_eq!(group_thousands(dec!(499999)), "499 999");
        assert_eq!(group_thousands(dec!(50000000)), "50 000 000");
    }

    #[test]
    fn range_label_renders_both_bounds() {
        let bracket = IgsBracket {
            tax_class: 10,
            min_revenue: dec!(30000000),
            max_revenue: dec!(49999999),
            standard_amount: dec!(2000000),
        };

        assert_eq!(bracket.range_label(), "de 30 000 000 à 49 999 999");
    }
}
