use std::fmt::{self, Display, Formatter};
use std::time::SystemTime;

/// A length of time broken down into hours, minutes, seconds and milliseconds. `timestamp` holds
/// the whole length in milliseconds.
///
/// Hours aren't wrapped into days, so a duration of two days has 48 `hours`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub ms: u64,
    pub timestamp: u64,
}

impl Duration {
    /// Breaks down `duration`, truncated to whole milliseconds.
    pub fn from_std(duration: std::time::Duration) -> Duration {
        let timestamp = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        let mut rest = timestamp;

        let hours = rest / 3_600_000;
        rest %= 3_600_000;
        let minutes = rest / 60_000;
        rest %= 60_000;

        Duration {
            hours,
            minutes,
            seconds: rest / 1000,
            ms: rest % 1000,
            timestamp,
        }
    }

    /// Returns the time elapsed from `since` until `point`, or a zero duration if `point` is
    /// earlier.
    pub fn between(point: SystemTime, since: SystemTime) -> Duration {
        Duration::from_std(point.duration_since(since).unwrap_or_default())
    }

    /// Returns the time elapsed since `since`.
    pub fn elapsed(since: SystemTime) -> Duration {
        Duration::between(SystemTime::now(), since)
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Duration::from_std(value)
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        std::time::Duration::from_millis(value.timestamp)
    }
}

/// Formats as `HH:MM:SS.mmm`.
impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours, self.minutes, self.seconds, self.ms
        )
    }
}
