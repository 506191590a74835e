use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Index;

use super::{IntoIter, IntoKeys, IntoValues, Iter, IterMut, KeyNotFound, Keys, Values, ValuesMut};
use crate::string;
use crate::util::error::{IndexOutOfBounds, ResultExtension};

/// A map of string keys to values, where keys are compared case-insensitively and entries are kept
/// in insertion order.
///
/// Every key-accepting method normalizes its key to ASCII lowercase before doing anything else, so
/// callers never need to pre-normalize and `"Foo"`, `"FOO"` and `"foo"` always refer to the same
/// entry. Stored keys are the normalized form.
///
/// Entries live in a contiguous sequence, with a [`HashMap`] from normalized key to position on the
/// side. Iteration follows the sequence: new keys are appended to the end, overwriting an existing
/// key keeps its position, [`insert_at`](LowercaseMap::insert_at) places an entry explicitly and
/// [`rename`](LowercaseMap::rename) changes a key without moving its entry.
///
/// Iterators borrow the map, so the borrow checker rejects any structural mutation (insertion,
/// removal, renaming) while one is alive. This is the only form of iterator invalidation the map
/// has.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the LowercaseMap.
/// - `k`: The length of the key being normalized.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get`, `contains`, `get_or_create` | `O(k)`* |
/// | `insert` | `O(k)`* |
/// | `rename` | `O(k)`* |
/// | `erase`, `erase_at`, `insert_at` | `O(n)` |
/// | `pop_back` | `O(1)`* |
///
/// \* Amortized, as with any hash-based index.
///
/// Removal from anywhere but the back shifts all later entries and updates their positions in the
/// index, which is the cost of keeping the order stable.
#[derive(Clone)]
pub struct LowercaseMap<V> {
    pub(crate) entries: Vec<(String, V)>,
    pub(crate) index: HashMap<String, usize>,
}

/// Normalizes a key, only allocating if it actually contains uppercase characters.
pub(crate) fn normalize(key: &str) -> Cow<'_, str> {
    if key.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(string::to_lower(key))
    } else {
        Cow::Borrowed(key)
    }
}

impl<V> LowercaseMap<V> {
    /// Creates a new, empty LowercaseMap. No memory is allocated until the first insertion.
    pub fn new() -> LowercaseMap<V> {
        LowercaseMap {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new LowercaseMap with room for `cap` entries without reallocating.
    pub fn with_cap(cap: usize) -> LowercaseMap<V> {
        LowercaseMap {
            entries: Vec::with_capacity(cap),
            index: HashMap::with_capacity(cap),
        }
    }

    /// Returns the number of entries in the LowercaseMap.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the LowercaseMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a mutable reference to the value for `key`, first appending an entry with the
    /// default value if there is none. This never fails.
    pub fn get_or_create(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let key = normalize(key);
        let pos = match self.index.get(key.as_ref()) {
            Some(&pos) => pos,
            None => self.push_unchecked(key.into_owned(), V::default()),
        };
        &mut self.entries[pos].1
    }

    /// Inserts `value` for `key`. If the key was already present the value is replaced in place,
    /// keeping the entry's position, and the previous value is returned. Otherwise the entry is
    /// appended to the end.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let key = normalize(key);
        match self.index.get(key.as_ref()) {
            Some(&pos) => Some(mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.push_unchecked(key.into_owned(), value);
                None
            },
        }
    }

    /// The same as [`insert`](LowercaseMap::insert), discarding any previous value.
    pub fn append(&mut self, key: &str, value: V) {
        self.insert(key, value);
    }

    /// Inserts every entry of `other` into self, in `other`'s order.
    pub fn append_map(&mut self, other: LowercaseMap<V>) {
        // Keys from another LowercaseMap are already normalized.
        for (key, value) in other {
            self.insert(&key, value);
        }
    }

    /// Removes all entries, then inserts the provided ones. This replaces the whole contents of the
    /// map, as opposed to [`Extend`], which merges.
    pub fn assign<K: AsRef<str>, I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        self.clear();
        self.extend(entries);
    }

    /// Inserts a new entry at position `index`, shifting all later entries back by one. Returns
    /// false and leaves the map untouched if `key` is already present, regardless of its position.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the map.
    pub fn insert_at(&mut self, index: usize, key: &str, value: V) -> bool {
        self.try_insert_at(index, key, value).throw()
    }

    /// A non-panicking version of [`insert_at`](LowercaseMap::insert_at).
    pub fn try_insert_at(
        &mut self,
        index: usize,
        key: &str,
        value: V,
    ) -> Result<bool, IndexOutOfBounds> {
        IndexOutOfBounds::check_insert(index, self.len())?;

        let key = normalize(key);
        if self.index.contains_key(key.as_ref()) {
            return Ok(false);
        }

        let key = key.into_owned();
        self.entries.insert(index, (key.clone(), value));
        self.index.insert(key, index);
        self.reindex_from(index + 1);
        Ok(true)
    }

    /// Returns the entry for `key` as a key-value pair, or None if there is no entry. The returned
    /// key is the normalized form.
    pub fn get_entry(&self, key: &str) -> Option<(&str, &V)> {
        let pos = self.position(key)?;
        let (key, value) = &self.entries[pos];
        Some((key.as_str(), value))
    }

    /// Returns a reference to the value associated with `key`, or None if there isn't one.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with `key`, or None if there isn't one.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let pos = self.position(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Returns the entry at position `index` in iteration order.
    pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
        self.entries.get(index).map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the position of `key` in iteration order.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(normalize(key).as_ref()).copied()
    }

    /// Returns true if there is an entry for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(normalize(key).as_ref())
    }

    /// Removes the entry for `key`, returning the number of entries removed (0 or 1). Removing an
    /// absent key is a no-op.
    pub fn erase(&mut self, key: &str) -> usize {
        usize::from(self.remove_entry(key).is_some())
    }

    /// Removes the entry for `key`, returning its value if it existed.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes the entry for `key`, returning it (with its normalized key) if it existed. The
    /// relative order of the remaining entries is unchanged.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let pos = self.index.remove(normalize(key).as_ref())?;
        let removed = self.entries.remove(pos);
        self.reindex_from(pos);
        Some(removed)
    }

    /// Removes the entry at position `index`, returning it if the index was in bounds.
    pub fn erase_at(&mut self, index: usize) -> Option<(String, V)> {
        if index >= self.len() {
            return None;
        }

        let removed = self.entries.remove(index);
        self.index.remove(&removed.0);
        self.reindex_from(index);
        Some(removed)
    }

    /// Removes and returns the last entry in iteration order.
    pub fn pop_back(&mut self) -> Option<(String, V)> {
        let removed = self.entries.pop()?;
        self.index.remove(&removed.0);
        Some(removed)
    }

    /// Changes the key of the entry for `old_key` to `new_key`, without moving the entry or
    /// touching its value.
    ///
    /// Returns false, leaving the map untouched, if both keys normalize to the same string, if
    /// there is no entry for `old_key` or if there is already an entry for `new_key`.
    pub fn rename(&mut self, old_key: &str, new_key: &str) -> bool {
        let old_key = normalize(old_key);
        let new_key = normalize(new_key);

        if old_key == new_key || self.index.contains_key(new_key.as_ref()) {
            return false;
        }

        let Some(pos) = self.index.remove(old_key.as_ref()) else {
            return false;
        };

        let new_key = new_key.into_owned();
        self.index.insert(new_key.clone(), pos);
        self.entries[pos].0 = new_key;
        true
    }

    /// Returns the first entry in iteration order, or None if the map is empty.
    pub fn front(&self) -> Option<(&str, &V)> {
        self.get_index(0)
    }

    /// Returns the last entry in iteration order, or None if the map is empty.
    pub fn back(&self) -> Option<(&str, &V)> {
        self.entries.last().map(|(k, v)| (k.as_str(), v))
    }

    /// Removes all entries, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns an iterator over all entries in insertion order, as references.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in insertion order, with mutable references to the
    /// values.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in insertion order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all keys in insertion order.
    pub fn into_keys(self) -> IntoKeys<V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all values in insertion order.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in insertion order, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all values in insertion order.
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues(self.into_iter())
    }
}

impl<V> LowercaseMap<V> {
    /// Appends an entry for a normalized key that is known to be absent, returning its position.
    fn push_unchecked(&mut self, key: String, value: V) -> usize {
        let pos = self.entries.len();
        self.index.insert(key.clone(), pos);
        self.entries.push((key, value));
        pos
    }

    /// Rewrites the index for every entry from `start` onwards, after entries have been shifted.
    fn reindex_from(&mut self, start: usize) {
        for (pos, (key, _)) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = pos;
            }
        }
    }
}

impl<V> Default for LowercaseMap<V> {
    fn default() -> Self {
        LowercaseMap::new()
    }
}

impl<V> Index<&str> for LowercaseMap<V> {
    type Output = V;

    /// # Panics
    /// Panics if there is no entry for `key`.
    fn index(&self, key: &str) -> &Self::Output {
        self.get(key)
            .ok_or_else(|| KeyNotFound { key: key.to_owned() })
            .throw()
    }
}

impl<K: AsRef<str>, V> Extend<(K, V)> for LowercaseMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key.as_ref(), value);
        }
    }
}

impl<K: AsRef<str>, V> FromIterator<(K, V)> for LowercaseMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = LowercaseMap::with_cap(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K: AsRef<str>, V, const N: usize> From<[(K, V); N]> for LowercaseMap<V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

// Equality and ordering consider the entries as a sequence, so two maps with the same contents in
// a different order are not equal.
impl<V: PartialEq> PartialEq for LowercaseMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Eq> Eq for LowercaseMap<V> {}

impl<V: PartialOrd> PartialOrd for LowercaseMap<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.entries.partial_cmp(&other.entries)
    }
}

impl<V: Ord> Ord for LowercaseMap<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entries.cmp(&other.entries)
    }
}

impl<V: Debug> Debug for LowercaseMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LowercaseMap")
            .field("entries", &DebugEntries(self))
            .field("len", &self.len())
            .finish()
    }
}

struct DebugEntries<'a, V>(&'a LowercaseMap<V>);

impl<V: Debug> Debug for DebugEntries<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<V: Debug> Display for LowercaseMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
