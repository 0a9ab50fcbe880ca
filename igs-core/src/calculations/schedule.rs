//! IGS schedule resolution.
//!
//! The impôt général synthétique is a flat levy read off an ordered table
//! of annual-revenue brackets. Each bracket carries an ordinal class and a
//! standard amount; members of an approved management centre (centre de
//! gestion agréé) owe half the standard amount. Revenue at or above the
//! schedule ceiling is outside the regime and owes nothing under it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use igs_core::{IgsSchedule, TaxClass};
//!
//! let schedule = IgsSchedule::statutory();
//!
//! let standard = schedule.resolve(dec!(750000), false);
//! assert_eq!(standard.tax_class, TaxClass::Class(2));
//! assert_eq!(standard.amount, dec!(30000));
//!
//! let reduced = schedule.resolve(dec!(750000), true);
//! assert_eq!(reduced.amount, dec!(15000));
//!
//! let ceiling = schedule.resolve(dec!(50000000), false);
//! assert!(ceiling.out_of_range);
//! assert_eq!(ceiling.amount, dec!(0));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{IgsBracket, IgsResolution, TaxClass};

/// The statutory ten-class table: `(class, min, max, standard amount)`.
const STATUTORY_TABLE: &[(u8, u64, u64, u64)] = &[
    (1, 0, 499_999, 20_000),
    (2, 500_000, 999_999, 30_000),
    (3, 1_000_000, 1_499_999, 40_000),
    (4, 1_500_000, 1_999_999, 50_000),
    (5, 2_000_000, 2_499_999, 60_000),
    (6, 2_500_000, 4_999_999, 150_000),
    (7, 5_000_000, 9_999_999, 300_000),
    (8, 10_000_000, 19_999_999, 500_000),
    (9, 20_000_000, 29_999_999, 1_000_000),
    (10, 30_000_000, 49_999_999, 2_000_000),
];

/// Revenue at or above this level is outside the statutory schedule.
const STATUTORY_CEILING: u64 = 50_000_000;

/// Errors that can occur when constructing a schedule.
///
/// A malformed table is a configuration defect: construction fails once,
/// up front, and no per-call error path exists afterwards.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IgsScheduleError {
    /// The schedule has no brackets at all.
    #[error("schedule has no brackets")]
    EmptySchedule,

    /// A bracket's lower bound exceeds its upper bound.
    #[error("class {tax_class}: minimum revenue {min} exceeds maximum revenue {max}")]
    InvertedBounds {
        tax_class: u8,
        min: Decimal,
        max: Decimal,
    },

    /// The lowest bracket must cover revenue from zero.
    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    /// Classes must run 1..=N in table order.
    #[error("expected class {expected} at this position, got {got}")]
    NonSequentialClass { expected: u8, got: u8 },

    /// Adjacent brackets must satisfy `previous.max + 1 == next.min`.
    /// Covers both gaps and overlaps.
    #[error("class {tax_class}: expected minimum revenue {expected}, got {got}")]
    NotContiguous {
        tax_class: u8,
        expected: Decimal,
        got: Decimal,
    },

    /// Standard amounts must be non-negative.
    #[error("class {tax_class}: standard amount {amount} is negative")]
    NegativeAmount { tax_class: u8, amount: Decimal },

    /// Standard amounts must not decrease as classes increase.
    #[error("class {tax_class}: standard amount {amount} is lower than the previous class's")]
    DecreasingAmount { tax_class: u8, amount: Decimal },

    /// The ceiling must sit flush against the top bracket.
    #[error("ceiling {ceiling} does not sit flush against the top bracket maximum {max}")]
    CeilingMismatch { ceiling: Decimal, max: Decimal },
}

/// A validated IGS schedule: the ordered bracket table plus the hard
/// ceiling above which revenue is outside the regime.
///
/// Construction validates every table invariant; a schedule that exists
/// is well-formed, so [`IgsSchedule::resolve`] is total and never fails.
/// The schedule is immutable after construction and safe to share across
/// threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgsSchedule {
    brackets: Vec<IgsBracket>,
    ceiling: Decimal,
}

impl IgsSchedule {
    /// Builds a schedule from brackets already sorted by class, failing
    /// on the first violated invariant.
    ///
    /// # Errors
    ///
    /// Returns [`IgsScheduleError`] if:
    /// - the table is empty
    /// - the first bracket does not start at 0
    /// - classes do not run 1..=N in order
    /// - any bracket has `min > max` or a negative amount
    /// - adjacent brackets leave a gap or overlap
    /// - amounts decrease from one class to the next
    /// - the ceiling is not `top.max_revenue + 1`
    pub fn new(
        brackets: Vec<IgsBracket>,
        ceiling: Decimal,
    ) -> Result<Self, IgsScheduleError> {
        validate(&brackets, ceiling)?;
        Ok(Self { brackets, ceiling })
    }

    /// The statutory ten-class schedule with its 50,000,000 ceiling.
    pub fn statutory() -> Self {
        let brackets = STATUTORY_TABLE
            .iter()
            .map(|&(tax_class, min, max, amount)| IgsBracket {
                tax_class,
                min_revenue: Decimal::from(min),
                max_revenue: Decimal::from(max),
                standard_amount: Decimal::from(amount),
            })
            .collect();

        Self {
            brackets,
            ceiling: Decimal::from(STATUTORY_CEILING),
        }
    }

    /// The ordered bracket table.
    pub fn brackets(&self) -> &[IgsBracket] {
        &self.brackets
    }

    /// Revenue at or above this level is outside the schedule.
    pub fn ceiling(&self) -> Decimal {
        self.ceiling
    }

    /// Resolves an annual revenue figure to its tax class and amount.
    ///
    /// The ceiling check takes precedence over bracket matching. Within
    /// the table, the first bracket with `min <= revenue <= max` wins;
    /// bounds are inclusive, so boundary values resolve to their own
    /// bracket. When `cga_member` is set the standard amount is halved
    /// and rounded to the nearest whole unit, half away from zero.
    ///
    /// Revenue below the lowest bound (negative figures included)
    /// defaults to the lowest bracket. No input panics or errors.
    pub fn resolve(
        &self,
        annual_revenue: Decimal,
        cga_member: bool,
    ) -> IgsResolution {
        if annual_revenue >= self.ceiling {
            return IgsResolution {
                tax_class: TaxClass::OutOfRange,
                amount: Decimal::ZERO,
                out_of_range: true,
            };
        }

        let matched = self
            .brackets
            .iter()
            .find(|b| b.min_revenue <= annual_revenue && annual_revenue <= b.max_revenue);

        let bracket = match matched {
            Some(bracket) => bracket,
            None => match self.brackets.first() {
                Some(first) if annual_revenue < first.min_revenue => {
                    warn!(%annual_revenue, "revenue below the lowest bracket, defaulting to its class");
                    first
                }
                _ => {
                    warn!(%annual_revenue, "no bracket matched; schedule does not cover this revenue");
                    return IgsResolution {
                        tax_class: TaxClass::Unresolved,
                        amount: Decimal::ZERO,
                        out_of_range: false,
                    };
                }
            },
        };

        let amount = if cga_member {
            round_half_up(bracket.standard_amount / Decimal::TWO)
        } else {
            bracket.standard_amount
        };

        IgsResolution {
            tax_class: TaxClass::Class(bracket.tax_class),
            amount,
            out_of_range: false,
        }
    }
}

fn validate(
    brackets: &[IgsBracket],
    ceiling: Decimal,
) -> Result<(), IgsScheduleError> {
    let Some(first) = brackets.first() else {
        return Err(IgsScheduleError::EmptySchedule);
    };

    if !first.min_revenue.is_zero() {
        return Err(IgsScheduleError::FirstBracketNotZero(first.min_revenue));
    }

    let mut previous: Option<&IgsBracket> = None;
    for (index, bracket) in brackets.iter().enumerate() {
        let expected_class = (index + 1) as u8;
        if bracket.tax_class != expected_class {
            return Err(IgsScheduleError::NonSequentialClass {
                expected: expected_class,
                got: bracket.tax_class,
            });
        }

        if bracket.min_revenue > bracket.max_revenue {
            return Err(IgsScheduleError::InvertedBounds {
                tax_class: bracket.tax_class,
                min: bracket.min_revenue,
                max: bracket.max_revenue,
            });
        }

        if bracket.standard_amount < Decimal::ZERO {
            return Err(IgsScheduleError::NegativeAmount {
                tax_class: bracket.tax_class,
                amount: bracket.standard_amount,
            });
        }

        if let Some(prev) = previous {
            let expected_min = prev.max_revenue + Decimal::ONE;
            if bracket.min_revenue != expected_min {
                return Err(IgsScheduleError::NotContiguous {
                    tax_class: bracket.tax_class,
                    expected: expected_min,
                    got: bracket.min_revenue,
                });
            }

            if bracket.standard_amount < prev.standard_amount {
                return Err(IgsScheduleError::DecreasingAmount {
                    tax_class: bracket.tax_class,
                    amount: bracket.standard_amount,
                });
            }
        }

        previous = Some(bracket);
    }

    if let Some(top) = previous {
        if ceiling != top.max_revenue + Decimal::ONE {
            return Err(IgsScheduleError::CeilingMismatch {
                ceiling,
                max: top.max_revenue,
            });
        }
    }

    Ok(())
}
