//! General-purpose collection types.
//!
//! # Purpose
//! These types cover the container needs of the rest of the crate: a map that treats its string
//! keys case-insensitively while remembering their order (think configuration or header files),
//! and a small set type for feature flags.
//!
//! # Method
//! Both collections are thin policies over containers from [`std`]. They own their entries
//! outright and only hand out borrows, so they are as thread-safe as their contents and no more:
//! wrap them in a lock to share them.

#[cfg(feature = "feature-set")]
pub mod feature;
#[cfg(feature = "lowercase")]
pub mod lowercase;
#[cfg(feature = "traits")]
pub mod traits;

#[cfg(feature = "feature-set")]
#[doc(inline)]
pub use feature::FeatureSet;
#[cfg(feature = "lowercase")]
#[doc(inline)]
pub use lowercase::LowercaseMap;
