//! Separate-chaining hash map over a fixed bucket array.
//!
//! # Architecture
//! - **Buckets**: boxed slice of chains, allocated empty at construction and
//!   never resized.
//! - **Addressing**: `FixedState` hash of the key, reduced modulo the bucket
//!   count. The seed is fixed, so placement (and therefore view order) is the
//!   same for the same sequence of mutations in every process.
//! - **Version**: a counter bumped by every successful mutation. Iterators
//!   compare it before each step.
//!
//! All operations take `&self`; state lives in `Cell`/`RefCell`. The map is
//! `!Sync` and the version check is a same-thread correctness aid only.

use crate::chain::{Chain, Entry};
use crate::error::MapError;
use crate::iter::Iter;
use crate::key::MapKey;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cell::{Cell, RefCell};
use core::fmt;
use core::hash::{BuildHasher, Hash};
use foldhash::fast::FixedState;

/// Number of buckets used by [`ChainMap::new`].
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// A hash map resolving collisions by chaining into a fixed number of buckets.
///
/// The bucket count never changes, so chains grow without bound as entries
/// are added and lookups degrade linearly with the load factor.
pub struct ChainMap<K, V> {
    buckets: Box<[RefCell<Chain<K, V>>]>,
    len: Cell<usize>,
    version: Cell<u64>,
    hasher: FixedState,
}

impl<K, V> ChainMap<K, V> {
    /// Creates an empty map with [`DEFAULT_BUCKET_COUNT`] buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::ChainMap;
    ///
    /// let map: ChainMap<char, f64> = ChainMap::new();
    /// assert_eq!(map.bucket_count(), 100);
    /// ```
    pub fn new() -> Self {
        Self::allocate(DEFAULT_BUCKET_COUNT)
    }

    /// Creates an empty map with exactly `bucket_count` buckets.
    ///
    /// Fails with [`MapError::InvalidCapacity`] when `bucket_count` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::{ChainMap, MapError};
    ///
    /// let map: ChainMap<u32, u32> = ChainMap::with_buckets(7).unwrap();
    /// assert_eq!(map.bucket_count(), 7);
    ///
    /// let err = ChainMap::<u32, u32>::with_buckets(0).unwrap_err();
    /// assert_eq!(err, MapError::InvalidCapacity { requested: 0 });
    /// ```
    pub fn with_buckets(bucket_count: usize) -> Result<Self, MapError> {
        if bucket_count == 0 {
            return Err(MapError::InvalidCapacity {
                requested: bucket_count,
            });
        }
        Ok(Self::allocate(bucket_count))
    }

    fn allocate(bucket_count: usize) -> Self {
        let mut buckets = Vec::with_capacity(bucket_count);
        for _ in 0..bucket_count {
            buckets.push(RefCell::new(Chain::new()));
        }

        Self {
            buckets: buckets.into_boxed_slice(),
            len: Cell::new(0),
            version: Cell::new(0),
            hasher: FixedState::default(),
        }
    }

    /// Number of buckets, fixed at construction.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Returns true if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current modification counter.
    ///
    /// Strictly increases on every successful mutation and is untouched by
    /// reads and by failed operations.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    /// Entries per bucket.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    /// Empties every bucket. Bumps the version once, even if already empty.
    pub fn clear(&self) {
        for bucket in self.buckets.iter() {
            bucket.borrow_mut().clear();
        }
        self.len.set(0);
        self.bump();
    }

    /// Returns an iterator over cloned `(key, value)` pairs in bucket-major,
    /// in-chain order.
    ///
    /// Each item is checked against the version recorded at creation; if the
    /// map changed in between, the iterator yields one
    /// [`MapError::ConcurrentModification`] and then ends.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    #[inline]
    pub(crate) fn bucket(&self, idx: usize) -> &RefCell<Chain<K, V>> {
        &self.buckets[idx]
    }

    #[inline]
    fn bump(&self) {
        self.version.set(self.version.get() + 1);
    }

    /// Materializes every entry through `f`, in view order.
    fn snapshot<T>(&self, mut f: impl FnMut(&Entry<K, V>) -> T) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for bucket in self.buckets.iter() {
            out.extend(bucket.borrow().iter().map(&mut f));
        }
        out
    }
}

impl<K: MapKey, V> ChainMap<K, V> {
    /// Bucket index for `key`; always in `0..bucket_count()`.
    #[inline]
    pub(crate) fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        (hash % self.buckets.len() as u64) as usize
    }

    #[inline]
    fn chain_for<Q>(&self, key: &Q) -> &RefCell<Chain<K, V>>
    where
        Q: Hash + ?Sized,
    {
        self.bucket(self.bucket_index(key))
    }

    /// Inserts a new entry.
    ///
    /// Fails with [`MapError::DuplicateKey`] if an equal key is present and
    /// with [`MapError::NullKey`] for an absent key. The map is unchanged on
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainmap::{ChainMap, MapError};
    ///
    /// let map = ChainMap::new();
    /// map.insert('a', 1.1).unwrap();
    /// assert_eq!(map.insert('a', 2.2), Err(MapError::DuplicateKey));
    /// assert_eq!(map.get(&'a'), Ok(1.1));
    /// ```
    pub fn insert(&self, key: K, value: V) -> Result<(), MapError> {
        if key.is_absent() {
            return Err(MapError::NullKey);
        }

        let mut chain = self.chain_for(&key).borrow_mut();
        if chain.find(&key).is_some() {
            return Err(MapError::DuplicateKey);
        }
        chain.push(key, value);
        self.len.set(self.len.get() + 1);
        self.bump();
        Ok(())
    }

    /// Pair form of [`insert`](Self::insert).
    pub fn insert_entry(&self, (key, value): (K, V)) -> Result<(), MapError> {
        self.insert(key, value)
    }

    /// Inserts or replaces.
    ///
    /// An existing entry keeps its bucket and chain position; only its value
    /// changes. Bumps the version in both cases.
    pub fn set(&self, key: K, value: V) -> Result<(), MapError> {
        if key.is_absent() {
            return Err(MapError::NullKey);
        }

        let mut chain = self.chain_for(&key).borrow_mut();
        match chain.find_mut(&key) {
            Some(entry) => entry.value = value,
            None => {
                chain.push(key, value);
                self.len.set(self.len.get() + 1);
            }
        }
        self.bump();
        Ok(())
    }

    /// Returns true if an equal key is present.
    ///
    /// Like every lookup, accepts any borrowed form of the key, so a
    /// `ChainMap<String, _>` can be queried with a `&str`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        if key.is_absent() {
            return false;
        }
        self.chain_for(key).borrow().find(key).is_some()
    }

    /// Removes the entry with an equal key. Returns false, without bumping the
    /// version, if there was none.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        self.remove_where(key, |_| true)
    }

    fn remove_where<Q>(&self, key: &Q, pred: impl FnOnce(&V) -> bool) -> bool
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        if key.is_absent() {
            return false;
        }

        let mut chain = self.chain_for(key).borrow_mut();
        let Some(pos) = chain.position(key) else {
            return false;
        };
        if !chain.entry_at(pos).is_some_and(|e| pred(&e.value)) {
            return false;
        }
        chain.remove_at(pos);
        self.len.set(self.len.get() - 1);
        self.bump();
        true
    }
}

impl<K: MapKey, V: Clone> ChainMap<K, V> {
    /// Returns a copy of the value for `key`, or `None` if it is not present.
    ///
    /// Never fails; an absent key simply is not found.
    pub fn try_get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        if key.is_absent() {
            return None;
        }
        self.chain_for(key)
            .borrow()
            .find(key)
            .map(|e| e.value.clone())
    }

    /// Returns a copy of the value for `key`.
    ///
    /// Fails with [`MapError::KeyNotFound`] if no equal key is present.
    pub fn get<Q>(&self, key: &Q) -> Result<V, MapError>
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        if key.is_absent() {
            return Err(MapError::NullKey);
        }
        self.try_get(key).ok_or(MapError::KeyNotFound)
    }
}

impl<K: MapKey, V: PartialEq> ChainMap<K, V> {
    /// Returns true if `key` is present and mapped to a value equal to `value`.
    pub fn contains_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        if key.is_absent() {
            return false;
        }
        self.chain_for(key)
            .borrow()
            .find(key)
            .is_some_and(|e| e.value == *value)
    }

    /// Removes the entry for `key` only if its value equals `value`.
    pub fn remove_entry<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: MapKey + ?Sized,
    {
        self.remove_where(key, |v| v == value)
    }
}

impl<K: Clone, V: Clone> ChainMap<K, V> {
    /// Snapshot of all keys in bucket-major, in-chain order.
    ///
    /// The returned vector is independent of later mutations.
    pub fn keys(&self) -> Vec<K> {
        self.snapshot(|e| e.key.clone())
    }

    /// Snapshot of all values, in the same order as [`keys`](Self::keys).
    pub fn values(&self) -> Vec<V> {
        self.snapshot(|e| e.value.clone())
    }

    /// Snapshot of all entries, in the same order as [`keys`](Self::keys).
    pub fn entries(&self) -> Vec<(K, V)> {
        self.snapshot(|e| (e.key.clone(), e.value.clone()))
    }

    /// Copies every entry into `dest` starting at `offset`, in view order.
    ///
    /// Nothing is written if the entries do not all fit.
    pub fn copy_to(&self, dest: &mut [(K, V)], offset: usize) -> Result<(), MapError> {
        let needed = self.len();
        let available = dest.len().saturating_sub(offset);
        if offset > dest.len() || available < needed {
            return Err(MapError::DestinationTooSmall { needed, available });
        }

        let mut slots = dest[offset..].iter_mut();
        for bucket in self.buckets.iter() {
            // Entries first so an exhausted chain does not consume a slot
            for (e, slot) in bucket.borrow().iter().zip(slots.by_ref()) {
                *slot = (e.key.clone(), e.value.clone());
            }
        }
        Ok(())
    }
}

impl<K, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for ChainMap<K, V> {
    fn clone(&self) -> Self {
        let buckets: Vec<_> = self
            .buckets
            .iter()
            .map(|b| RefCell::new(b.borrow().clone()))
            .collect();

        Self {
            buckets: buckets.into_boxed_slice(),
            len: Cell::new(self.len()),
            version: Cell::new(0),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ChainMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut m = f.debug_map();
        for bucket in self.buckets.iter() {
            for e in bucket.borrow().iter() {
                m.entry(&e.key, &e.value);
            }
        }
        m.finish()
    }
}

impl<'a, K: Clone, V: Clone> IntoIterator for &'a ChainMap<K, V> {
    type Item = Result<(K, V), MapError>;
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
