use std::collections::btree_set;
use std::iter::FusedIterator;

use super::FeatureSet;

impl<T: Ord> IntoIterator for FeatureSet<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.store.into_iter())
    }
}

/// A type for owned iteration over a [`FeatureSet`]. Produces values of type `T`, in ascending
/// order.
pub struct IntoIter<T>(pub(crate) btree_set::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Ord> IntoIterator for &'a FeatureSet<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.store.iter())
    }
}

/// A type for borrowed iteration over a [`FeatureSet`]. Produces values of type `&T`, in ascending
/// order.
///
/// See [`FeatureSet::iter`].
pub struct Iter<'a, T>(pub(crate) btree_set::Iter<'a, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
