// Time Domain Model

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::constants::{MAX_SUPPORTED_MILLIS, MIN_SUPPORTED_MILLIS};
use crate::error::{Result, TimeError};

/// Milliseconds elapsed since 1970-01-01T00:00:00Z
///
/// Negative values are pre-epoch instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PosixTimeMillis(i64);

impl PosixTimeMillis {
    pub const EPOCH: PosixTimeMillis = PosixTimeMillis(0);

    pub const fn new(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    pub fn is_supported(&self) -> bool {
        (MIN_SUPPORTED_MILLIS..=MAX_SUPPORTED_MILLIS).contains(&self.0)
    }

    /// Passes the value through if it has a calendar representation
    ///
    /// # Errors
    /// `TimeError::OutOfRange` outside `MIN_SUPPORTED_MILLIS..=MAX_SUPPORTED_MILLIS`
    pub fn ensure_supported(self) -> Result<Self> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(TimeError::OutOfRange(format!(
                "{} ms is outside the supported range [{}, {}]",
                self.0, MIN_SUPPORTED_MILLIS, MAX_SUPPORTED_MILLIS
            )))
        }
    }
}

impl From<i64> for PosixTimeMillis {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<PosixTimeMillis> for i64 {
    fn from(ts: PosixTimeMillis) -> Self {
        ts.0
    }
}

impl std::fmt::Display for PosixTimeMillis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar time pinned to UTC (+00:00)
///
/// Built only through the conversion functions or a range-checked
/// deserialize, so it is never naive and always inside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct UtcTime(DateTime<Utc>);

impl UtcTime {
    pub(crate) fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Epoch milliseconds of this instant
    pub fn timestamp_millis(&self) -> PosixTimeMillis {
        PosixTimeMillis(self.0.timestamp_millis())
    }

    /// Always zero
    pub fn offset_seconds(&self) -> i32 {
        0
    }

    /// RFC 3339 with millisecond precision and a `Z` suffix
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl TryFrom<DateTime<Utc>> for UtcTime {
    type Error = TimeError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self> {
        PosixTimeMillis(dt.timestamp_millis()).ensure_supported()?;
        Ok(Self(dt))
    }
}

impl From<UtcTime> for DateTime<Utc> {
    fn from(t: UtcTime) -> Self {
        t.0
    }
}

/// Calendar time rendered with the local offset that applied at the instant
///
/// Equality and ordering compare instants, not offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateTime<FixedOffset>", into = "DateTime<FixedOffset>")]
pub struct LocalTime(DateTime<FixedOffset>);

impl LocalTime {
    pub(crate) fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn timestamp_millis(&self) -> PosixTimeMillis {
        PosixTimeMillis(self.0.timestamp_millis())
    }

    pub fn offset(&self) -> FixedOffset {
        *self.0.offset()
    }

    /// Seconds east of UTC
    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().local_minus_utc()
    }

    /// Same instant, rendered in UTC
    pub fn to_utc(&self) -> UtcTime {
        UtcTime(self.0.with_timezone(&Utc))
    }

    pub fn same_instant(&self, utc: &UtcTime) -> bool {
        self.0 == utc.0
    }

    /// RFC 3339 with millisecond precision and a `+HH:MM` suffix
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, false)
    }
}

impl std::fmt::Display for LocalTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

impl TryFrom<DateTime<FixedOffset>> for LocalTime {
    type Error = TimeError;

    fn try_from(dt: DateTime<FixedOffset>) -> Result<Self> {
        PosixTimeMillis(dt.timestamp_millis()).ensure_supported()?;
        Ok(Self(dt))
    }
}

impl From<LocalTime> for DateTime<FixedOffset> {
    fn from(t: LocalTime) -> Self {
        t.0
    }
}
