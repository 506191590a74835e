use std::iter::FusedIterator;
use std::slice::Iter as EntryIter;
use std::slice::IterMut as EntryIterMut;
use std::vec::IntoIter as EntryIntoIter;

use super::LowercaseMap;

impl<V> IntoIterator for LowercaseMap<V> {
    type Item = (String, V);

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.entries.into_iter())
    }
}

/// A type for owned iteration over a [`LowercaseMap`], in insertion order. Produces values of type
/// `(String, V)`.
pub struct IntoIter<V>(pub(crate) EntryIntoIter<(String, V)>);

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<'a, V> IntoIterator for &'a mut LowercaseMap<V> {
    type Item = (&'a str, &'a mut V);

    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut(self.entries.iter_mut())
    }
}

/// A type for iteration over a [`LowercaseMap`] with mutable values. Keys are never mutable, see
/// [`LowercaseMap::rename`].
///
/// See [`LowercaseMap::iter_mut`].
pub struct IterMut<'a, V>(pub(crate) EntryIterMut<'a, (String, V)>);

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}

impl<V> FusedIterator for IterMut<'_, V> {}

impl<'a, V> IntoIterator for &'a LowercaseMap<V> {
    type Item = (&'a str, &'a V);

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.entries.iter())
    }
}

/// A type for borrowed iteration over a [`LowercaseMap`], in insertion order.
///
/// See [`LowercaseMap::iter`].
pub struct Iter<'a, V>(pub(crate) EntryIter<'a, (String, V)>);

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// A type for owned iteration over the keys of a [`LowercaseMap`], in insertion order.
///
/// See [`LowercaseMap::into_keys`].
pub struct IntoKeys<V>(pub(crate) IntoIter<V>);

impl<V> Iterator for IntoKeys<V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoKeys<V> {}

impl<V> FusedIterator for IntoKeys<V> {}

/// A type for borrowed iteration over the keys of a [`LowercaseMap`], in insertion order.
///
/// See [`LowercaseMap::keys`].
pub struct Keys<'a, V>(pub(crate) Iter<'a, V>);

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

impl<V> FusedIterator for Keys<'_, V> {}

/// A type for owned iteration over the values of a [`LowercaseMap`], in insertion order.
///
/// See [`LowercaseMap::into_values`].
pub struct IntoValues<V>(pub(crate) IntoIter<V>);

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoValues<V> {}

impl<V> FusedIterator for IntoValues<V> {}

/// A type for borrowed iteration over the values of a [`LowercaseMap`], in insertion order.
///
/// See [`LowercaseMap::values`].
pub struct Values<'a, V>(pub(crate) Iter<'a, V>);

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}

/// A type for iteration over mutable references to the values of a [`LowercaseMap`], in
/// insertion order.
///
/// See [`LowercaseMap::values_mut`].
pub struct ValuesMut<'a, V>(pub(crate) IterMut<'a, V>);

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

impl<V> FusedIterator for ValuesMut<'_, V> {}
