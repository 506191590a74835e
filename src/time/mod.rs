//! Time points, durations and their textual forms.
//!
//! Time points are [`chrono::DateTime<Utc>`] internally. Anything that can be turned into one
//! ([`IntoTimePoint`]) can be formatted, so seconds since the epoch, [`SystemTime`] and chrono's own
//! types are all accepted interchangeably.
//!
//! [`SystemTime`]: std::time::SystemTime

mod duration;
mod format;
mod point;
mod tests;

pub use duration::*;
pub use format::*;
pub use point::*;
