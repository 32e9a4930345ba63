//! Conversions shared across threads without locking

use std::sync::Arc;
use std::thread;

use rtime_core::application::TimeConversion;
use rtime_core::domain::PosixTimeMillis;
use rtime_core::port::{FixedOffsetProvider, FixedWallClock};

const THREADS: i64 = 8;
const PER_THREAD: i64 = 1_000;

#[test]
fn test_shared_service_across_threads() {
    let conv = Arc::new(TimeConversion::new(
        Arc::new(FixedWallClock::new(42.0)),
        Arc::new(FixedOffsetProvider::parse("+05:45").unwrap()),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let conv = Arc::clone(&conv);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let ts = PosixTimeMillis::new(t * 1_000_000_007 + i);
                    let utc = conv.to_utc(ts).unwrap();
                    let local = conv.to_local(ts).unwrap();

                    assert!(local.same_instant(&utc));
                    assert_eq!(local.offset_seconds(), 5 * 3600 + 45 * 60);
                    assert_eq!(conv.timestamp().unwrap(), PosixTimeMillis::new(42_000));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_host_service_across_threads() {
    let handles: Vec<_> = (0..THREADS)
        .map(|_| thread::spawn(|| rtime::timestamp().unwrap()))
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().as_millis() > 0);
    }
}
