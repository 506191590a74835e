//! Reading simple `key: value` files into a [`LowercaseMap`].
//!
//! This is the format used by many `/proc` files (such as `/proc/meminfo` or `/proc/cpuinfo`) and
//! plenty of ad-hoc configuration files. Lines are parsed independently, so anything that isn't a
//! key-value pair is skipped rather than treated as an error.
//!
//! [`LowercaseMap`]: crate::collections::LowercaseMap

mod error;
mod parse;

pub use error::*;
pub use parse::*;
