//! rtime - epoch milliseconds, UTC and local calendar time
//!
//! Thin facade over `rtime-core` wired to the host wall clock and timezone.
//! Use [`TimeConversion`] directly to inject a different clock or offset source.
//!
//! # Example
//!
//! ```no_run
//! fn main() -> rtime::Result<()> {
//!     let now = rtime::timestamp()?;
//!     println!("{} ms since epoch", now);
//!
//!     let utc = rtime::to_utc(0)?;
//!     assert_eq!(utc.to_string(), "1970-01-01T00:00:00.000Z");
//!
//!     let local = rtime::to_local(now.as_millis())?;
//!     println!("local: {}", local);
//!
//!     Ok(())
//! }
//! ```

pub use chrono::FixedOffset;
pub use rtime_core::application::{seconds_to_posix, TimeConversion};
pub use rtime_core::domain::{
    format_utc_offset, parse_utc_offset, LocalTime, PosixTimeMillis, UtcTime,
    MAX_SUPPORTED_MILLIS, MICROS_PER_MILLI, MILLIS_PER_SECOND, MIN_SUPPORTED_MILLIS,
};
pub use rtime_core::port::{FixedOffsetProvider, FixedWallClock, OffsetProvider, WallClock};
pub use rtime_core::{Result, TimeError};
pub use rtime_infra_system::{HostOffsetProvider, SystemWallClock};

/// Current wall-clock time as whole milliseconds since epoch (truncated)
pub fn timestamp() -> Result<PosixTimeMillis> {
    rtime_infra_system::host_conversion().timestamp()
}

/// Epoch milliseconds as a UTC calendar time
pub fn to_utc(millis: i64) -> Result<UtcTime> {
    rtime_core::application::to_utc(PosixTimeMillis::new(millis))
}

/// Epoch milliseconds as a calendar time in the host's local timezone
pub fn to_local(millis: i64) -> Result<LocalTime> {
    rtime_infra_system::host_conversion().to_local(PosixTimeMillis::new(millis))
}

/// Epoch milliseconds as a calendar time at an explicit offset
pub fn to_local_with(millis: i64, offset: FixedOffset) -> Result<LocalTime> {
    rtime_core::application::to_local_with(PosixTimeMillis::new(millis), offset)
}
