use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax class assigned to a resolved revenue figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxClass {
    /// Ordinal class of the matched bracket (1..=N).
    Class(u8),

    /// Revenue at or above the schedule ceiling, outside every bracket.
    OutOfRange,

    /// No bracket matched. Cannot occur for a validated schedule.
    Unresolved,
}

impl TaxClass {
    /// The ordinal class number, if the revenue matched a bracket.
    pub fn as_number(&self) -> Option<u8> {
        match self {
            Self::Class(n) => Some(*n),
            Self::OutOfRange | Self::Unresolved => None,
        }
    }
}

impl fmt::Display for TaxClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(n) => write!(f, "{n}"),
            Self::OutOfRange => write!(f, "Hors barème"),
            Self::Unresolved => write!(f, "Non déterminé"),
        }
    }
}

/// Outcome of resolving a revenue figure against the schedule.
///
/// Built fresh on every call; nothing here is cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgsResolution {
    /// Matched class, or a sentinel for revenue outside the schedule.
    pub tax_class: TaxClass,

    /// Levy owed, after any reduced-rate halving. Zero when out of range.
    pub amount: Decimal,

    /// True when revenue is at or above the schedule ceiling.
    pub out_of_range: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tax_class_displays_number_for_matched_bracket() {
        assert_eq!(TaxClass::Class(7).to_string(), "7");
    }

    #[test]
    fn tax_class_displays_sentinel_for_out_of_range() {
        assert_eq!(TaxClass::OutOfRange.to_string(), "Hors barème");
    }

    #[test]
    fn tax_class_as_number_only_for_matched_bracket() {
        assert_eq!(TaxClass::Class(3).as_number(), Some(3));
        assert_eq!(TaxClass::OutOfRange.as_number(), None);
        assert_eq!(TaxClass::Unresolved.as_number(), None);
    }
}
