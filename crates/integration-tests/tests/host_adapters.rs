//! Host clock and host timezone adapters, end to end

use chrono::{Local, TimeZone, Utc};

use rtime_core::domain::{PosixTimeMillis, MILLIS_PER_SECOND};
use rtime_infra_system::{host_conversion, SystemWallClock};
use rtime_core::port::WallClock;

/// 2020-01-01T00:00:00Z
const SANE_LOWER_BOUND_MILLIS: i64 = 1_577_836_800_000;

#[test]
fn test_timestamp_tracks_system_time() {
    let before = Utc::now().timestamp_millis();
    let now = rtime::timestamp().unwrap().as_millis();
    let after = Utc::now().timestamp_millis();

    assert!(now > SANE_LOWER_BOUND_MILLIS);
    // Wall clock may be stepped; allow one second of slack either side
    assert!(now >= before - MILLIS_PER_SECOND);
    assert!(now <= after + MILLIS_PER_SECOND);
}

#[test]
fn test_system_wall_clock_and_timestamp_agree() {
    let seconds = SystemWallClock.now_seconds().unwrap();
    let millis = host_conversion().timestamp().unwrap().as_millis();

    assert!((millis as f64 / MILLIS_PER_SECOND as f64 - seconds).abs() < 1.0);
}

#[test]
fn test_host_local_uses_offset_at_instant() {
    let conv = host_conversion();
    // Mid-winter and mid-summer, so DST zones resolve different offsets
    for millis in [1_704_067_200_000_i64, 1_719_792_000_000] {
        let local = conv.to_local(PosixTimeMillis::new(millis)).unwrap();
        let expected = Utc
            .timestamp_millis_opt(millis)
            .unwrap()
            .with_timezone(&Local)
            .offset()
            .local_minus_utc();

        assert_eq!(local.offset_seconds(), expected);
        assert_eq!(local.timestamp_millis().as_millis(), millis);
    }
}

#[test]
fn test_facade_to_local_matches_service() {
    let local = rtime::to_local(0).unwrap();
    let utc = rtime::to_utc(0).unwrap();
    assert!(local.same_instant(&utc));
}
