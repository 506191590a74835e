//! Memory and capacity sizes as plain numbers, with unit conversions on the side.
//!
//! [`Storage`] behaves like the number it wraps (arithmetic and comparison work against both raw
//! numbers and other Storage values) and adds [`kb`](Storage::kb), [`mb`](Storage::mb) and
//! [`gb`](Storage::gb) accessors. The wrapped value is a size in KiB, which is what `/proc` files
//! such as `meminfo` report.

mod storage;

pub use storage::*;
