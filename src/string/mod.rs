//! Small string helpers: case conversion, trimming, splitting, character classes, quoting, hex and
//! hashing.
//!
//! Everything here works on ASCII semantics. Case conversion and the character classes ignore
//! non-ASCII characters entirely, which keeps the functions predictable for configuration keys and
//! the contents of `/proc` files, where they're mostly used.

mod case;
mod hash;
mod hex;
mod pad;
mod predicate;
mod quote;
mod scan;
mod split;
mod trim;
mod tests;

pub use case::*;
pub use hash::*;
pub use hex::*;
pub use pad::*;
pub use predicate::*;
pub use quote::*;
pub use scan::*;
pub use split::*;
pub use trim::*;

/// The characters treated as whitespace by the trimming functions.
pub const WHITESPACE: &str = " \t\n\r\x0C\x0B";
