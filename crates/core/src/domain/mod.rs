// Domain Layer - Time value types and calendar rules

pub mod constants;
pub mod offset;
pub mod time;

// Re-exports
pub use constants::{
    MAX_SUPPORTED_MILLIS, MICROS_PER_MILLI, MILLIS_PER_SECOND, MIN_SUPPORTED_MILLIS,
};
pub use offset::{format_utc_offset, offset_from_seconds, parse_utc_offset};
pub use time::{LocalTime, PosixTimeMillis, UtcTime};
