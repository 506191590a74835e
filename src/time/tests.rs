#![cfg(test)]

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Timelike, Utc};

use super::*;
use crate::env::FixedEnvironment;

// 2023-11-14 22:13:20 UTC
const TIMESTAMP: i64 = 1_700_000_000;

#[test]
fn test_duration_breakdown() {
    let duration = Duration::from_std(std::time::Duration::from_millis(3_723_456));
    assert_eq!(
        duration,
        Duration {
            hours: 1,
            minutes: 2,
            seconds: 3,
            ms: 456,
            timestamp: 3_723_456,
        }
    );
    assert_eq!(duration.to_string(), "01:02:03.456");

    let long = Duration::from_std(std::time::Duration::from_secs(2 * 86_400));
    assert_eq!(long.hours, 48, "Hours shouldn't wrap into days.");
}

#[test]
fn test_duration_between() {
    let since = UNIX_EPOCH + std::time::Duration::from_secs(100);
    let point = since + std::time::Duration::from_millis(1500);

    let elapsed = Duration::between(point, since);
    assert_eq!((elapsed.seconds, elapsed.ms), (1, 500));
    assert_eq!(
        Duration::between(since, point),
        Duration::default(),
        "A point before its start should saturate to zero."
    );
    assert_eq!(std::time::Duration::from(elapsed).as_millis(), 1500);
}

#[test]
fn test_time_points() {
    let point = mk_time_point(1.5);
    assert_eq!(point.timestamp(), 1);
    assert_eq!(point.timestamp_subsec_millis(), 500);
    assert_eq!(mk_time_point(f64::NAN), DateTime::<Utc>::default());

    assert_eq!(mk_duration(TIMESTAMP), TIMESTAMP);
    assert_eq!(mk_duration(TIMESTAMP as f64 + 0.9), TIMESTAMP);
    assert_eq!(mk_duration(std::time::Duration::from_secs(42)), 42);
    assert_eq!(mk_duration(UNIX_EPOCH + std::time::Duration::from_secs(7)), 7);
    assert_eq!(mk_duration(mk_time_point(12.0)), 12);

    assert_eq!(mk_duration_secs(12.99), 12);
    assert_eq!(mk_duration_secs(-1.5), -1, "Conversion should truncate toward zero.");
}

#[test]
fn test_out_of_range_points_fall_back_to_epoch() {
    let far = std::time::Duration::from_secs(1 << 45);

    assert_eq!(mk_duration(far), 0, "Durations past the representable range give the epoch.");
    assert_eq!(mk_duration(UNIX_EPOCH + far), 0);
    assert_eq!(mk_duration(UNIX_EPOCH - far), 0);
    assert_eq!(mk_duration(1_i64 << 45), 0, "Every input type should agree on the fallback.");

    assert_eq!(put_time("%Y", far), put_time("%Y", 0_i64));
    assert_eq!(time_str(UNIX_EPOCH - far), time_str(0_i64));
    assert_eq!(to_local(far).timestamp(), 0);
}

#[test]
fn test_system_time_before_epoch() {
    let before = UNIX_EPOCH - std::time::Duration::from_millis(1500);
    let point = before.into_time_point();

    assert_eq!(point.timestamp(), -2);
    assert_eq!(point.timestamp_subsec_millis(), 500);
    assert_eq!(mk_duration(UNIX_EPOCH - std::time::Duration::from_secs(60)), -60);
}

#[test]
fn test_get_millis_tracks_system_clock() {
    let before = mk_duration(SystemTime::now()) * 1000;
    let millis = get_millis();
    assert!(millis >= before, "{millis} should not be earlier than {before}.");
}

#[test]
fn test_put_time_in_fixed_offsets() {
    assert_eq!(put_time_in("%Y-%m-%d %H:%M:%S", TIMESTAMP, 0), "2023-11-14 22:13:20");
    assert_eq!(put_time_in("%H:%M", TIMESTAMP, 3600), "23:13");
    assert_eq!(put_time_in("%Y-%m-%d %H:%M", TIMESTAMP, 19_800), "2023-11-15 03:43");
    assert_eq!(
        put_time_in("%H:%M", TIMESTAMP, 86_400),
        "22:13",
        "Out of range offsets should fall back to UTC."
    );
}

#[test]
fn test_put_time_uses_local_time() {
    let local = to_local(TIMESTAMP);
    assert_eq!(local.timestamp(), TIMESTAMP);
    assert_eq!(time_str(TIMESTAMP), local.format("%Y-%m-%d %H:%M:%S").to_string());
    assert_eq!(put_time("%M:%S", TIMESTAMP), format!("{:02}:20", local.minute()));
}

#[test]
fn test_invalid_format_is_empty() {
    assert_eq!(put_time_in("%Y-%", TIMESTAMP, 0), "");
}

#[test]
fn test_timezone_diff_uses_environment() {
    let env = FixedEnvironment::new(-18_000, None);
    assert_eq!(timezone_diff(&env), -18_000);
}

#[test]
fn test_uptime_short() {
    assert_eq!(uptime_str(90_061, false, true), "1d 01:01:01");
    assert_eq!(uptime_str(90_061, false, false), "1d 01:01");
    assert_eq!(uptime_str(59, false, false), "00:00");
    assert_eq!(uptime_str(3_599, false, true), "00:59:59");
    assert_eq!(uptime_str(-5, false, true), "00:00:00");
}

#[test]
fn test_uptime_long() {
    assert_eq!(
        uptime_str(2 * 86_400 + 2 * 3_600 + 60 + 1, true, true),
        "2 days, 2 hours, 1 minute, 1 second"
    );
    assert_eq!(uptime_str(86_400 + 5, true, false), "1 day", "Zero components should be omitted.");
    assert_eq!(uptime_str(0, true, true), "0 seconds");
    assert_eq!(uptime_str(30, true, false), "0 minutes");
}
