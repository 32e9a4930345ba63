// Wall clock implementation
// reason: std SystemTime is the host wall clock; no monotonic semantics wanted
use std::time::{SystemTime, UNIX_EPOCH};

use rtime_core::port::WallClock;
use rtime_core::Result;

/// Host wall clock via `std::time::SystemTime`
///
/// A host clock set before 1970 yields a negative reading rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemWallClock;

impl WallClock for SystemWallClock {
    fn now_seconds(&self) -> Result<f64> {
        let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs_f64(),
            Err(before) => -before.duration().as_secs_f64(),
        };
        Ok(seconds)
    }
}
