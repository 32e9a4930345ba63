// Time constants (No magic values)

/// Milliseconds in one second
pub const MILLIS_PER_SECOND: i64 = 1000;

/// Microseconds in one millisecond
pub const MICROS_PER_MILLI: i64 = 1000;

/// Earliest supported instant: 0000-01-01T00:00:00.000Z
///
/// The supported range is the span of four-digit RFC 3339 years.
pub const MIN_SUPPORTED_MILLIS: i64 = -62_167_219_200_000;

/// Latest supported instant: 9999-12-31T23:59:59.999Z
pub const MAX_SUPPORTED_MILLIS: i64 = 253_402_300_799_999;

/// Largest accepted UTC offset magnitude (23:59:59)
///
/// Mirrors the bound `chrono::FixedOffset::east_opt` enforces; used in messages.
pub const MAX_OFFSET_SECONDS: i32 = 86_399;

/// Seconds in one hour
pub const SECONDS_PER_HOUR: i32 = 3600;

/// Seconds in one minute
pub const SECONDS_PER_MINUTE: i32 = 60;
