// Time conversion service
use chrono::{FixedOffset, TimeZone, Utc};
use std::sync::Arc;
use tracing::{trace, warn};

use crate::domain::constants::MILLIS_PER_SECOND;
use crate::domain::{LocalTime, PosixTimeMillis, UtcTime};
use crate::error::{Result, TimeError};
use crate::port::{OffsetProvider, WallClock};

/// Convert a fractional-seconds clock reading to epoch milliseconds
///
/// Truncates toward zero: `1700000000.9999` becomes `1700000000999`, never
/// `1700000001000`. Sub-millisecond precision is dropped.
///
/// # Errors
/// `TimeError::ClockUnavailable` for NaN, infinite or i64-overflowing readings
pub fn seconds_to_posix(seconds: f64) -> Result<PosixTimeMillis> {
    let millis = (seconds * MILLIS_PER_SECOND as f64).trunc();

    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if !millis.is_finite() || millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
        warn!(seconds = %seconds, "Unusable wall clock reading");
        return Err(TimeError::ClockUnavailable(format!(
            "clock reading {} seconds is not a representable instant",
            seconds
        )));
    }

    Ok(PosixTimeMillis::new(millis as i64))
}

/// Convert epoch milliseconds to a UTC calendar time
///
/// Supported range is `MIN_SUPPORTED_MILLIS..=MAX_SUPPORTED_MILLIS`
/// (0000-01-01T00:00:00.000Z to 9999-12-31T23:59:59.999Z).
///
/// # Errors
/// `TimeError::OutOfRange` outside the supported range
pub fn to_utc(ts: PosixTimeMillis) -> Result<UtcTime> {
    let millis = ts
        .ensure_supported()
        .map_err(|e| {
            warn!(millis = %ts, "Timestamp outside supported calendar range");
            e
        })?
        .as_millis();

    let dt = Utc.timestamp_millis_opt(millis).single().ok_or_else(|| {
        TimeError::OutOfRange(format!("{} ms has no UTC calendar representation", millis))
    })?;
    trace!(millis = %millis, utc = %dt, "Converted timestamp to UTC");

    Ok(UtcTime::from_datetime(dt))
}

/// Convert epoch milliseconds to a calendar time at an explicit offset
pub fn to_local_with(ts: PosixTimeMillis, offset: FixedOffset) -> Result<LocalTime> {
    let utc = to_utc(ts)?;
    Ok(LocalTime::from_datetime(
        utc.as_datetime().with_timezone(&offset),
    ))
}

/// Conversion service wired to a wall clock and an offset provider
///
/// Stateless apart from the injected ports; safe to share across threads.
#[derive(Clone)]
pub struct TimeConversion {
    clock: Arc<dyn WallClock>,
    offsets: Arc<dyn OffsetProvider>,
}

impl TimeConversion {
    /// Create a new conversion service
    ///
    /// # Arguments
    /// * `clock` - Source of the current wall-clock reading
    /// * `offsets` - Source of the local UTC offset for an instant
    ///
    /// # Example
    /// ```text
    /// let conv = TimeConversion::new(
    ///     Arc::new(FixedWallClock::new(0.0)),
    ///     Arc::new(FixedOffsetProvider::utc()),
    /// );
    /// ```
    pub fn new(clock: Arc<dyn WallClock>, offsets: Arc<dyn OffsetProvider>) -> Self {
        Self { clock, offsets }
    }

    /// Current instant as whole milliseconds since epoch
    pub fn timestamp(&self) -> Result<PosixTimeMillis> {
        let seconds = self.clock.now_seconds().map_err(|e| {
            warn!(error = %e, "Wall clock read failed");
            e
        })?;
        seconds_to_posix(seconds)
    }

    /// Pure; does not touch either port
    pub fn to_utc(&self, ts: PosixTimeMillis) -> Result<UtcTime> {
        to_utc(ts)
    }

    /// Same instant as `to_utc`, rendered at the offset in effect at `ts`
    pub fn to_local(&self, ts: PosixTimeMillis) -> Result<LocalTime> {
        let utc = to_utc(ts)?;
        let offset = self.offsets.offset_at(utc.as_datetime()).map_err(|e| {
            warn!(millis = %ts, error = %e, "Local offset resolution failed");
            e
        })?;

        trace!(
            millis = %ts,
            offset_secs = offset.local_minus_utc(),
            "Resolved local offset"
        );

        Ok(LocalTime::from_datetime(
            utc.as_datetime().with_timezone(&offset),
        ))
    }
}

impl std::fmt::Debug for TimeConversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeConversion").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MAX_SUPPORTED_MILLIS, MIN_SUPPORTED_MILLIS};
    use crate::port::wall_clock::mocks::MockWallClock;
    use crate::port::{FixedOffsetProvider, FixedWallClock};
    use chrono::{DateTime, Offset};
    use rstest::rstest;

    fn conversion(seconds: f64, offset_secs: i32) -> TimeConversion {
        TimeConversion::new(
            Arc::new(FixedWallClock::new(seconds)),
            Arc::new(FixedOffsetProvider::east_seconds(offset_secs).unwrap()),
        )
    }

    /// Offset provider that alternates between two offsets around an instant
    struct SplitOffsetProvider {
        switch_at_millis: i64,
        before: FixedOffset,
        after: FixedOffset,
    }

    impl OffsetProvider for SplitOffsetProvider {
        fn offset_at(&self, instant: &DateTime<Utc>) -> Result<FixedOffset> {
            if instant.timestamp_millis() < self.switch_at_millis {
                Ok(self.before)
            } else {
                Ok(self.after)
            }
        }
    }

    struct NoOffsetProvider;

    impl OffsetProvider for NoOffsetProvider {
        fn offset_at(&self, _instant: &DateTime<Utc>) -> Result<FixedOffset> {
            Err(TimeError::TimezoneUnavailable("no zone configured".to_string()))
        }
    }

    #[rstest]
    #[case(1_700_000_000.9999, 1_700_000_000_999)]
    #[case(1_700_000_000.0, 1_700_000_000_000)]
    #[case(0.0, 0)]
    #[case(0.0009, 0)]
    #[case(-0.0005, 0)]
    #[case(-1.5, -1_500)]
    #[case(-1.0019, -1_001)]
    fn test_seconds_to_posix_truncates(#[case] seconds: f64, #[case] expected: i64) {
        assert_eq!(
            seconds_to_posix(seconds).unwrap(),
            PosixTimeMillis::new(expected)
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(1e300)]
    fn test_seconds_to_posix_rejects_unusable_readings(#[case] seconds: f64) {
        assert!(matches!(
            seconds_to_posix(seconds),
            Err(TimeError::ClockUnavailable(_))
        ));
    }

    #[rstest]
    #[case(0, "1970-01-01T00:00:00.000Z")]
    #[case(1_000, "1970-01-01T00:00:01.000Z")]
    #[case(-1_000, "1969-12-31T23:59:59.000Z")]
    #[case(-1, "1969-12-31T23:59:59.999Z")]
    #[case(1_700_000_000_123, "2023-11-14T22:13:20.123Z")]
    #[case(MIN_SUPPORTED_MILLIS, "0000-01-01T00:00:00.000Z")]
    #[case(MAX_SUPPORTED_MILLIS, "9999-12-31T23:59:59.999Z")]
    fn test_to_utc_scenarios(#[case] millis: i64, #[case] expected: &str) {
        let utc = to_utc(PosixTimeMillis::new(millis)).unwrap();
        assert_eq!(utc.to_string(), expected);
        assert_eq!(utc.timestamp_millis().as_millis(), millis);
    }

    #[rstest]
    #[case(i64::MAX)]
    #[case(i64::MIN)]
    #[case(MAX_SUPPORTED_MILLIS + 1)]
    #[case(MIN_SUPPORTED_MILLIS - 1)]
    fn test_to_utc_out_of_range(#[case] millis: i64) {
        let err = to_utc(PosixTimeMillis::new(millis)).unwrap_err();
        assert!(matches!(err, TimeError::OutOfRange(_)));
        assert!(err.to_string().contains(&millis.to_string()));
    }

    #[test]
    fn test_to_utc_always_zero_offset() {
        for millis in [MIN_SUPPORTED_MILLIS, -86_400_000, 0, 951_782_400_000, MAX_SUPPORTED_MILLIS] {
            let utc = to_utc(PosixTimeMillis::new(millis)).unwrap();
            assert_eq!(utc.as_datetime().offset().fix().local_minus_utc(), 0);
            assert!(utc.to_rfc3339().ends_with('Z'));
        }
    }

    #[test]
    fn test_to_utc_is_monotonic() {
        let samples = [
            MIN_SUPPORTED_MILLIS,
            -1_000,
            -1,
            0,
            1,
            999,
            1_000,
            MAX_SUPPORTED_MILLIS,
        ];
        for pair in samples.windows(2) {
            let a = to_utc(PosixTimeMillis::new(pair[0])).unwrap();
            let b = to_utc(PosixTimeMillis::new(pair[1])).unwrap();
            assert!(a < b, "{} should precede {}", a, b);
        }
    }

    #[test]
    fn test_timestamp_reads_clock() {
        let conv = conversion(1_700_000_000.9999, 0);
        assert_eq!(
            conv.timestamp().unwrap(),
            PosixTimeMillis::new(1_700_000_000_999)
        );
    }

    #[test]
    fn test_timestamp_clock_unavailable() {
        let clock = Arc::new(MockWallClock::unavailable());
        let conv = TimeConversion::new(clock.clone(), Arc::new(FixedOffsetProvider::utc()));

        assert!(matches!(
            conv.timestamp(),
            Err(TimeError::ClockUnavailable(_))
        ));

        clock.set_seconds(12.5);
        assert_eq!(conv.timestamp().unwrap(), PosixTimeMillis::new(12_500));
    }

    #[test]
    fn test_to_local_fixed_plus_two() {
        let conv = conversion(0.0, 2 * 3600);
        let local = conv.to_local(PosixTimeMillis::EPOCH).unwrap();

        assert_eq!(local.to_string(), "1970-01-01T02:00:00.000+02:00");
        assert!(local.same_instant(&conv.to_utc(PosixTimeMillis::EPOCH).unwrap()));
    }

    #[test]
    fn test_to_local_uses_offset_at_instant() {
        let provider = SplitOffsetProvider {
            switch_at_millis: 1_000,
            before: FixedOffset::east_opt(3600).unwrap(),
            after: FixedOffset::east_opt(7200).unwrap(),
        };
        let conv = TimeConversion::new(Arc::new(FixedWallClock::new(0.0)), Arc::new(provider));

        let before = conv.to_local(PosixTimeMillis::new(999)).unwrap();
        let after = conv.to_local(PosixTimeMillis::new(1_000)).unwrap();

        assert_eq!(before.offset_seconds(), 3600);
        assert_eq!(after.offset_seconds(), 7200);
        assert!(before < after);
    }

    #[test]
    fn test_to_local_timezone_unavailable() {
        let conv = TimeConversion::new(
            Arc::new(FixedWallClock::new(0.0)),
            Arc::new(NoOffsetProvider),
        );

        assert!(matches!(
            conv.to_local(PosixTimeMillis::EPOCH),
            Err(TimeError::TimezoneUnavailable(_))
        ));
    }

    #[test]
    fn test_to_local_out_of_range_checked_first() {
        let conv = TimeConversion::new(
            Arc::new(FixedWallClock::new(0.0)),
            Arc::new(NoOffsetProvider),
        );

        assert!(matches!(
            conv.to_local(PosixTimeMillis::new(i64::MAX)),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_to_local_with_explicit_offset() {
        let offset = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        let local = to_local_with(PosixTimeMillis::new(-1_000), offset).unwrap();

        assert_eq!(local.to_string(), "1969-12-31T18:29:59.000-05:30");
        assert_eq!(local.timestamp_millis(), PosixTimeMillis::new(-1_000));
    }
}
