use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{AddAssign, BitXorAssign, SubAssign};

use super::Iter;
use crate::collections::traits::Set;

/// A set of enabled features (typically a fieldless enum), where each feature is either present or
/// absent.
///
/// Features are kept sorted, so iteration happens in the order defined by `T`'s [`Ord`] and not in
/// the order they were enabled.
///
/// Besides the named methods, features can be toggled with operators:
/// ```
/// # use common_lib::collections::FeatureSet;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// enum Flag { Color, Unicode }
///
/// let mut flags = FeatureSet::new();
/// flags += Flag::Color;
/// flags += Flag::Unicode;
/// flags -= Flag::Color;
/// assert!(flags.has(&Flag::Unicode) && !flags.has(&Flag::Color));
/// ```
#[derive(Clone, Hash)]
pub struct FeatureSet<T: Ord> {
    pub(crate) store: BTreeSet<T>,
}

impl<T: Ord> FeatureSet<T> {
    pub const fn new() -> FeatureSet<T> {
        FeatureSet {
            store: BTreeSet::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.store.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns true if `feature` is enabled.
    pub fn contains(&self, feature: &T) -> bool {
        self.store.contains(feature)
    }

    /// An alias of [`contains`](FeatureSet::contains) that reads better in conditions.
    pub fn has(&self, feature: &T) -> bool {
        self.contains(feature)
    }

    /// Enables `feature`, returning true if it wasn't enabled already.
    pub fn insert(&mut self, feature: T) -> bool {
        self.store.insert(feature)
    }

    /// Disables `feature`, returning true if it was enabled.
    pub fn remove(&mut self, feature: &T) -> bool {
        self.store.remove(feature)
    }

    /// Enables or disables `feature` depending on `state`.
    pub fn set(&mut self, feature: T, state: bool) {
        if state {
            self.store.insert(feature);
        } else {
            self.store.remove(&feature);
        }
    }

    /// Disables `feature`. Disabling a feature that isn't enabled does nothing.
    pub fn unset(&mut self, feature: &T) {
        self.store.remove(feature);
    }

    /// The same as [`unset`](FeatureSet::unset).
    pub fn erase(&mut self, feature: &T) {
        self.unset(feature);
    }

    /// Replaces the enabled features with the provided ones.
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, features: I) {
        self.store.clear();
        self.store.extend(features);
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Returns an iterator over the enabled features, in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> Set<T> for FeatureSet<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    fn contains(&self, item: &T) -> bool {
        self.store.contains(item)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.into_iter()
    }
}

impl<T: Ord> Default for FeatureSet<T> {
    fn default() -> Self {
        FeatureSet::new()
    }
}

impl<T: Ord> AddAssign<T> for FeatureSet<T> {
    fn add_assign(&mut self, feature: T) {
        self.store.insert(feature);
    }
}

impl<T: Ord> SubAssign<T> for FeatureSet<T> {
    fn sub_assign(&mut self, feature: T) {
        self.store.remove(&feature);
    }
}

/// Disables the feature. This doesn't toggle: an absent feature stays absent.
impl<T: Ord> BitXorAssign<T> for FeatureSet<T> {
    fn bitxor_assign(&mut self, feature: T) {
        self.store.remove(&feature);
    }
}

impl<T: Ord> Extend<T> for FeatureSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}

impl<T: Ord> FromIterator<T> for FeatureSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FeatureSet {
            store: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for FeatureSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Ord> PartialEq for FeatureSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_superset(other)
    }
}

impl<T: Ord> Eq for FeatureSet<T> {}

impl<T: Ord + Debug> Debug for FeatureSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Ord + Display> Display for FeatureSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
