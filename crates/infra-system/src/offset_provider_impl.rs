// Host offset provider implementation
// reason: chrono::Local reads TZ and the system zone database (DST included)
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use tracing::trace;

use rtime_core::domain::offset_from_seconds;
use rtime_core::port::OffsetProvider;
use rtime_core::Result;

/// Offset provider backed by the host timezone configuration
///
/// Resolved on every call and never cached, so a change to the host setting
/// is picked up by the next conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOffsetProvider;

impl HostOffsetProvider {
    pub fn new() -> Self {
        Self
    }
}

impl OffsetProvider for HostOffsetProvider {
    fn offset_at(&self, instant: &DateTime<Utc>) -> Result<FixedOffset> {
        let resolved = Local.offset_from_utc_datetime(&instant.naive_utc());
        let offset = offset_from_seconds(resolved.local_minus_utc())?;

        trace!(
            instant = %instant,
            offset_secs = offset.local_minus_utc(),
            "Host offset resolved"
        );

        Ok(offset)
    }
}
