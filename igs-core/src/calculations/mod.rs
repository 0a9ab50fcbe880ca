//! Calculation logic for the IGS levy.
//!
//! The schedule module owns the validated bracket table and the resolver;
//! memo wraps a schedule with an explicit cache for repeated resolutions.

pub mod common;
pub mod memo;
pub mod schedule;

pub use memo::MemoizedResolver;
pub use schedule::{IgsSchedule, IgsScheduleError};
