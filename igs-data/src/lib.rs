mod loader;

pub use loader::{IgsScheduleLoader, IgsScheduleLoaderError, IgsScheduleRecord};
