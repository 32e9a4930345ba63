// rtime Infrastructure - Host Adapters
// Implements: WallClock, OffsetProvider

pub mod offset_provider_impl;
pub mod wall_clock_impl;

use std::sync::Arc;

use rtime_core::application::TimeConversion;
use rtime_core::port::FixedOffsetProvider;
use rtime_core::Result;
use tracing::debug;

pub use offset_provider_impl::HostOffsetProvider;
pub use wall_clock_impl::SystemWallClock;

/// Conversion service backed by the host clock and host timezone
pub fn host_conversion() -> TimeConversion {
    TimeConversion::new(Arc::new(SystemWallClock), Arc::new(HostOffsetProvider::new()))
}

/// Conversion service with an optional fixed offset override
///
/// `None` falls back to the host timezone.
///
/// # Errors
/// `TimeError::TimezoneUnavailable` if the override is not a valid offset
pub fn configured_conversion(offset: Option<&str>) -> Result<TimeConversion> {
    match offset {
        Some(text) => {
            let provider = FixedOffsetProvider::parse(text)?;
            debug!(offset = %text, "Using configured UTC offset");
            Ok(TimeConversion::new(Arc::new(SystemWallClock), Arc::new(provider)))
        }
        None => Ok(host_conversion()),
    }
}
