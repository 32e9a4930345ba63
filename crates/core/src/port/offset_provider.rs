// Local offset port
use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::domain::offset::{offset_from_seconds, parse_utc_offset};
use crate::error::Result;

/// Resolves the local UTC offset that applies at an instant
///
/// Implementations may consult mutable host configuration, so two calls for
/// the same instant are allowed to disagree.
pub trait OffsetProvider: Send + Sync {
    /// Offset in effect at `instant`
    ///
    /// # Errors
    /// `TimeError::TimezoneUnavailable` when no offset can be resolved
    fn offset_at(&self, instant: &DateTime<Utc>) -> Result<FixedOffset>;
}

/// Offset provider with a single offset and no DST
#[derive(Debug, Clone, Copy)]
pub struct FixedOffsetProvider {
    offset: FixedOffset,
}

impl FixedOffsetProvider {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Offset given as seconds east of UTC
    pub fn east_seconds(seconds: i32) -> Result<Self> {
        offset_from_seconds(seconds).map(Self::new)
    }

    /// Offset given as text, e.g. `+02:00` or `Z`
    pub fn parse(text: &str) -> Result<Self> {
        parse_utc_offset(text).map(Self::new)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl OffsetProvider for FixedOffsetProvider {
    fn offset_at(&self, _instant: &DateTime<Utc>) -> Result<FixedOffset> {
        Ok(self.offset)
    }
}
