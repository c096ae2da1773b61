//! Collision chain: the entries sharing one bucket, kept in insertion order.

use alloc::vec::Vec;
use core::borrow::Borrow;

/// A key-value pair stored in a chain.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Ordered entries resolved by linear scan.
#[derive(Debug, Clone)]
pub(crate) struct Chain<K, V> {
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn entry_at(&self, pos: usize) -> Option<&Entry<K, V>> {
        self.entries.get(pos)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> {
        self.entries.iter()
    }

    /// Appends at the tail. The caller guarantees the key is not present.
    pub(crate) fn push(&mut self, key: K, value: V) {
        self.entries.push(Entry { key, value });
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> Chain<K, V> {
    /// Position of the entry whose key equals `key`.
    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|e| e.key.borrow() == key)
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().find(|e| e.key.borrow() == key)
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter_mut().find(|e| e.key.borrow() == key)
    }

    /// Removes the entry at `pos`, shifting later entries down so the
    /// remaining order is unchanged.
    pub(crate) fn remove_at(&mut self, pos: usize) -> Entry<K, V> {
        self.entries.remove(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_push_preserves_order() {
        let mut chain = Chain::new();
        chain.push(3, "c");
        chain.push(1, "a");
        chain.push(2, "b");
        let keys: Vec<_> = chain.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut chain = Chain::new();
        for k in 0..5 {
            chain.push(k, k * 10);
        }
        let pos = chain.position(&2).unwrap();
        let removed = chain.remove_at(pos);
        assert_eq!((removed.key, removed.value), (2, 20));
        let keys: Vec<_> = chain.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![0, 1, 3, 4]);
        assert!(chain.find(&2).is_none());
    }

    #[test]
    fn test_find_mut_replaces_in_place() {
        let mut chain = Chain::new();
        chain.push('a', 1.1);
        chain.push('b', 2.2);
        chain.find_mut(&'a').unwrap().value = 9.9;
        assert_eq!(chain.entry_at(0).map(|e| e.value), Some(9.9));
        assert_eq!(chain.entry_at(1).map(|e| e.value), Some(2.2));
        assert!(chain.entry_at(2).is_none());
    }
}
