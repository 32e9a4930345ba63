// Wall Clock Port (for testability)

use crate::error::Result;

/// Wall clock interface (allows fixed readings in tests)
pub trait WallClock: Send + Sync {
    /// Current time as fractional seconds since epoch
    ///
    /// # Errors
    /// `TimeError::ClockUnavailable` when the host clock cannot be read
    fn now_seconds(&self) -> Result<f64>;
}

/// Wall clock that always reports the same reading
#[derive(Debug, Clone, Copy)]
pub struct FixedWallClock {
    seconds: f64,
}

impl FixedWallClock {
    pub fn new(seconds: f64) -> Self {
        Self { seconds }
    }
}

impl WallClock for FixedWallClock {
    fn now_seconds(&self) -> Result<f64> {
        Ok(self.seconds)
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

#[cfg(any(test, feature = "test-util"))]
pub mod mocks {
    use super::*;
    use crate::error::TimeError;
    use std::sync::Mutex;

    /// Mock WallClock whose reading can be moved or broken
    pub struct MockWallClock {
        reading: Mutex<Option<f64>>,
    }

    impl MockWallClock {
        pub fn new(seconds: f64) -> Self {
            Self {
                reading: Mutex::new(Some(seconds)),
            }
        }

        /// A clock that fails every read
        pub fn unavailable() -> Self {
            Self {
                reading: Mutex::new(None),
            }
        }

        pub fn set_seconds(&self, seconds: f64) {
            *self.reading.lock().unwrap() = Some(seconds);
        }

        pub fn break_clock(&self) {
            *self.reading.lock().unwrap() = None;
        }
    }

    impl WallClock for MockWallClock {
        fn now_seconds(&self) -> Result<f64> {
            self.reading
                .lock()
                .unwrap()
                .ok_or_else(|| TimeError::ClockUnavailable("mock clock is broken".to_string()))
        }
    }
}
