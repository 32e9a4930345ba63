// Central Error Type for time conversions

use thiserror::Error;

/// Conversion error type
///
/// Every failure is surfaced to the caller as-is. Nothing is retried and no
/// default time is ever substituted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// The host wall clock could not be read (or produced an unusable reading)
    #[error("Clock unavailable: {0}")]
    ClockUnavailable(String),

    /// The epoch-millisecond value has no calendar representation
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// No local UTC offset could be resolved
    #[error("Timezone unavailable: {0}")]
    TimezoneUnavailable(String),
}

/// Result type alias using TimeError
pub type Result<T> = std::result::Result<T, TimeError>;
