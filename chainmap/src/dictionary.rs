//! Capability contract for key-value collections.
//!
//! Code that only needs to read or edit a map (printers, loaders, tests)
//! should take `impl Dictionary<K, V>` rather than a concrete map type.

use crate::error::MapError;
use crate::iter::Iter;
use crate::key::MapKey;
use crate::map::ChainMap;
use alloc::vec::Vec;

/// The operations a dictionary exposes.
///
/// Mutating methods take `&self`; implementors use interior mutability and
/// report interleaved mutation through [`MapError::ConcurrentModification`]
/// on their iterators.
pub trait Dictionary<K, V> {
    /// Iterator returned by [`iter`](Self::iter).
    type Iter<'a>: Iterator<Item = Result<(K, V), MapError>>
    where
        Self: 'a;

    /// Inserts a new entry; fails on a duplicate or absent key.
    fn insert(&self, key: K, value: V) -> Result<(), MapError>;

    /// Looks up a value without failing.
    fn try_get(&self, key: &K) -> Option<V>;

    /// Looks up a value; fails if the key is not present.
    fn get(&self, key: &K) -> Result<V, MapError>;

    /// Inserts or replaces.
    fn set(&self, key: K, value: V) -> Result<(), MapError>;

    /// Returns true if the key is present.
    fn contains_key(&self, key: &K) -> bool;

    /// Removes an entry; returns whether one was removed.
    fn remove(&self, key: &K) -> bool;

    /// Removes every entry.
    fn clear(&self);

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns true if there are no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of keys.
    fn keys(&self) -> Vec<K>;

    /// Snapshot of values, aligned with [`keys`](Self::keys).
    fn values(&self) -> Vec<V>;

    /// Snapshot of `(key, value)` pairs in the order of [`keys`](Self::keys).
    fn entries(&self) -> Vec<(K, V)>;

    /// Inserts a pair; same rules as [`insert`](Self::insert).
    fn insert_entry(&self, entry: (K, V)) -> Result<(), MapError>;

    /// Returns true if `key` is present and mapped to `value`.
    fn contains_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq;

    /// Removes `key` only if it is mapped to `value`.
    fn remove_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq;

    /// Writes every entry into `dest` starting at `offset`.
    fn copy_to(&self, dest: &mut [(K, V)], offset: usize) -> Result<(), MapError>;

    /// Lazy traversal of all entries.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<K, V> Dictionary<K, V> for ChainMap<K, V>
where
    K: MapKey + Clone,
    V: Clone,
{
    type Iter<'a>
        = Iter<'a, K, V>
    where
        Self: 'a;

    fn insert(&self, key: K, value: V) -> Result<(), MapError> {
        ChainMap::insert(self, key, value)
    }

    fn try_get(&self, key: &K) -> Option<V> {
        ChainMap::try_get(self, key)
    }

    fn get(&self, key: &K) -> Result<V, MapError> {
        ChainMap::get(self, key)
    }

    fn set(&self, key: K, value: V) -> Result<(), MapError> {
        ChainMap::set(self, key, value)
    }

    fn contains_key(&self, key: &K) -> bool {
        ChainMap::contains_key(self, key)
    }

    fn remove(&self, key: &K) -> bool {
        ChainMap::remove(self, key)
    }

    fn clear(&self) {
        ChainMap::clear(self)
    }

    fn len(&self) -> usize {
        ChainMap::len(self)
    }

    fn keys(&self) -> Vec<K> {
        ChainMap::keys(self)
    }

    fn values(&self) -> Vec<V> {
        ChainMap::values(self)
    }

    fn entries(&self) -> Vec<(K, V)> {
        ChainMap::entries(self)
    }

    fn insert_entry(&self, entry: (K, V)) -> Result<(), MapError> {
        ChainMap::insert_entry(self, entry)
    }

    fn contains_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        ChainMap::contains_entry(self, key, value)
    }

    fn remove_entry(&self, key: &K, value: &V) -> bool
    where
        V: PartialEq,
    {
        ChainMap::remove_entry(self, key, value)
    }

    fn copy_to(&self, dest: &mut [(K, V)], offset: usize) -> Result<(), MapError> {
        ChainMap::copy_to(self, dest, offset)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ChainMap::iter(self)
    }
}
