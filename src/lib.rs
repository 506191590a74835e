//! A grab bag of utilities that keep turning up in system tools: an insertion-ordered map with
//! case-insensitive keys, a set of feature flags, a numeric wrapper for storage sizes, and helpers
//! for strings, time, and reading `/proc`-style files.
//!
//! # Purpose
//! Most of this crate exists because small programs that read configuration files or `/proc`
//! end up rewriting the same handful of helpers. Collecting them in one place means each one gets
//! written (and tested) once.
//!
//! # Method
//! The collections wrap [`std`] containers rather than reimplementing them. The interesting part
//! is the behaviour layered on top: [`LowercaseMap`](collections::LowercaseMap) normalizes every
//! key at its boundary and remembers insertion order, and
//! [`FeatureSet`](collections::FeatureSet) exposes a flag-oriented API (including `+=` and `-=`)
//! over a sorted set.
//!
//! Everything else is a free function or a small value type. Nothing here holds global state:
//! functions that depend on the process environment (the current timezone or the path of the
//! running executable) read it through the [`Environment`](env::Environment) trait, so tests can
//! substitute fixed values.
//!
//! # Error Handling
//! Errors are returned as [`Result`]s with strongly typed errors: structs that implement
//! [`Error`](std::error::Error), grouped into enums where an operation can fail in more than one
//! way. Looking up something that isn't there is not an error, so those methods return an
//! [`Option`], a [`bool`] or a count instead.
//!
//! Breaking a method's contract (such as inserting past the end of a
//! [`LowercaseMap`](collections::LowercaseMap)) panics. Where that's the case, there is a `try_`
//! variant that returns the error instead.
//!
//! # Dependencies
//! The [`os`] module relies on `libc` for the `getgroups` syscall, and [`time`] uses `chrono` for
//! timezones and formatting. Library code logs through `tracing` (only around file and `/proc`
//! reads), leaving it to the binary to install a subscriber.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod env;
#[cfg(feature = "fs")]
pub mod fs;
#[cfg(all(feature = "os", target_os = "linux"))]
pub mod os;
pub mod storage;
pub mod string;
pub mod time;
pub mod units;

pub(crate) mod util;
