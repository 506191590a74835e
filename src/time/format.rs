use std::fmt::Write;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

use super::{IntoTimePoint, to_local};

const TIME_STR_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// Formats `time` in the local timezone using strftime syntax (see [`chrono::format::strftime`]).
///
/// An invalid format string produces an empty string.
pub fn put_time(format: &str, time: impl IntoTimePoint) -> String {
    render(format, &to_local(time))
}

/// Formats `time` at a fixed `offset` from UTC, in seconds. Offsets of a day or more are treated as
/// UTC.
pub fn put_time_in(format: &str, time: impl IntoTimePoint, offset: i64) -> String {
    let offset = i32::try_from(offset)
        .ok()
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix());
    render(format, &time.into_time_point().with_timezone(&offset))
}

fn render<Tz: TimeZone>(format: &str, time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
    }
    out
}

/// Formats `time` as `YYYY-MM-DD HH:MM:SS` in the local timezone.
pub fn time_str(time: impl IntoTimePoint) -> String {
    put_time(TIME_STR_FORMAT, time)
}

/// Describes an uptime of `secs` seconds. Negative values are treated as 0.
///
/// The short form is `[Nd ]HH:MM[:SS]`. The long form spells out each non-zero component, as in
/// `2 days, 1 hour, 5 minutes`. Seconds are only included if `seconds` is set.
///
/// ```
/// # use common_lib::time::uptime_str;
/// assert_eq!(uptime_str(90_061, false, true), "1d 01:01:01");
/// assert_eq!(uptime_str(3_660, true, false), "1 hour, 1 minute");
/// ```
pub fn uptime_str(secs: i64, long_desc: bool, seconds: bool) -> String {
    let total = u64::try_from(secs).unwrap_or(0);
    let days = total / SECS_PER_DAY;
    let hours = total % SECS_PER_DAY / SECS_PER_HOUR;
    let minutes = total % SECS_PER_HOUR / SECS_PER_MINUTE;
    let secs = total % SECS_PER_MINUTE;

    if !long_desc {
        let mut out = String::new();
        if days > 0 {
            out.push_str(&format!("{days}d "));
        }
        out.push_str(&format!("{hours:02}:{minutes:02}"));
        if seconds {
            out.push_str(&format!(":{secs:02}"));
        }
        return out;
    }

    let mut parts = vec![(days, "day"), (hours, "hour"), (minutes, "minute")];
    if seconds {
        parts.push((secs, "second"));
    }

    let described: Vec<String> = parts
        .into_iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, unit)| plural(count, unit))
        .collect();

    if described.is_empty() {
        plural(0, if seconds { "second" } else { "minute" })
    } else {
        described.join(", ")
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
