//! Human-readable relative time.

pub mod difference;
pub mod error;

pub use difference::{CalendarDiff, parse_datetime, time_difference};
pub use error::TimeError;
