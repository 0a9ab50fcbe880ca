pub mod calculations;
pub mod models;

pub use calculations::{IgsSchedule, IgsScheduleError, MemoizedResolver};
pub use models::*;
