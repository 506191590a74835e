use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::env::Environment;

/// Anything that identifies a point in time. Plain numbers and [`std::time::Duration`]s are
/// measured from the Unix epoch.
pub trait IntoTimePoint {
    fn into_time_point(self) -> DateTime<Utc>;
}

/// Seconds since the epoch, with a fractional part.
impl IntoTimePoint for f64 {
    fn into_time_point(self) -> DateTime<Utc> {
        mk_time_point(self)
    }
}

/// Whole seconds since the epoch.
impl IntoTimePoint for i64 {
    fn into_time_point(self) -> DateTime<Utc> {
        DateTime::from_timestamp(self, 0).unwrap_or_default()
    }
}

/// Time since the epoch. Durations past the representable range give the epoch itself.
impl IntoTimePoint for std::time::Duration {
    fn into_time_point(self) -> DateTime<Utc> {
        i64::try_from(self.as_secs())
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, self.subsec_nanos()))
            .unwrap_or_default()
    }
}

/// Times outside of the representable range give the epoch itself, as with the other conversions.
impl IntoTimePoint for SystemTime {
    fn into_time_point(self) -> DateTime<Utc> {
        match self.duration_since(UNIX_EPOCH) {
            Ok(since) => since.into_time_point(),
            Err(before) => before_epoch(before.duration()),
        }
    }
}

/// Creates a time point `before` ahead of the epoch, keeping nanoseconds non-negative.
fn before_epoch(before: std::time::Duration) -> DateTime<Utc> {
    let Ok(secs) = i64::try_from(before.as_secs()) else {
        return DateTime::default();
    };

    let (secs, nanos) = match before.subsec_nanos() {
        0 => (-secs, 0),
        nanos => (-secs - 1, 1_000_000_000 - nanos),
    };
    DateTime::from_timestamp(secs, nanos).unwrap_or_default()
}

impl<Tz: TimeZone> IntoTimePoint for DateTime<Tz> {
    fn into_time_point(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// Returns the number of milliseconds since the Unix epoch.
pub fn get_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Returns the offset of the environment's timezone from UTC in seconds, positive east of UTC.
pub fn timezone_diff(env: &impl Environment) -> i64 {
    env.timezone_offset()
}

/// Creates a time point `secs` seconds after the epoch, keeping sub-second precision down to
/// nanoseconds. Values outside of the representable range give the epoch itself.
pub fn mk_time_point(secs: f64) -> DateTime<Utc> {
    if !secs.is_finite() {
        return DateTime::default();
    }

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9) as u32;
    DateTime::from_timestamp(whole as i64, nanos.min(999_999_999)).unwrap_or_default()
}

/// Returns the whole seconds between the epoch and `time`.
pub fn mk_duration(time: impl IntoTimePoint) -> i64 {
    time.into_time_point().timestamp()
}

/// Truncates `secs` to whole seconds.
pub fn mk_duration_secs(secs: f64) -> i64 {
    secs.trunc() as i64
}

/// Converts `time` to the local timezone.
pub fn to_local(time: impl IntoTimePoint) -> DateTime<Local> {
    time.into_time_point().with_timezone(&Local)
}
