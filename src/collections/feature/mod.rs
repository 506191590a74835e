//! A module containing [`FeatureSet`] and its iterators.
//!
//! Set operations between two FeatureSets (union, difference etc.) come from the
//! [`Set`](crate::collections::traits::Set) trait.

mod feature_set;
mod iter;
mod tests;

pub use feature_set::*;
pub use iter::*;
