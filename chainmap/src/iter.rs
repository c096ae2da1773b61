//! Modification-checked traversal of a [`ChainMap`].

use crate::error::MapError;
use crate::map::ChainMap;
use core::iter::FusedIterator;

/// Iterator over cloned map entries.
///
/// Records the map's version when created and compares it before producing
/// every item. After reporting [`MapError::ConcurrentModification`] it yields
/// nothing more. Dropping it early has no effect on the map.
pub struct Iter<'a, K, V> {
    map: &'a ChainMap<K, V>,
    expected_version: u64,
    bucket_idx: usize,
    pos: usize,
    done: bool,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(map: &'a ChainMap<K, V>) -> Self {
        Self {
            map,
            expected_version: map.version(),
            bucket_idx: 0,
            pos: 0,
            done: false,
        }
    }
}

impl<K, V> Iterator for Iter<'_, K, V>
where
    K: Clone,
    V: Clone,
{
    type Item = Result<(K, V), MapError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.map.version() != self.expected_version {
            self.done = true;
            return Some(Err(MapError::ConcurrentModification));
        }

        while self.bucket_idx < self.map.bucket_count() {
            let chain = self.map.bucket(self.bucket_idx).borrow();
            if let Some(e) = chain.entry_at(self.pos) {
                self.pos += 1;
                return Some(Ok((e.key.clone(), e.value.clone())));
            }

            // Move to next bucket
            self.bucket_idx += 1;
            self.pos = 0;
        }

        self.done = true;
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            // A detected modification adds one error item.
            (0, Some(self.map.len() + 1))
        }
    }
}

impl<K: Clone, V: Clone> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_iter_matches_entries() {
        let map = ChainMap::with_buckets(3).unwrap();
        for i in 0..20 {
            map.insert(i, i + 1).unwrap();
        }
        let walked: Vec<_> = map.iter().collect::<Result<_, _>>().unwrap();
        assert_eq!(walked, map.entries());
    }

    #[test]
    fn test_fused_after_modification() {
        let map = ChainMap::new();
        map.insert(1, 1).unwrap();
        map.insert(2, 2).unwrap();

        let mut it = map.iter();
        assert!(matches!(it.next(), Some(Ok(_))));
        map.set(1, 5).unwrap();
        assert_eq!(it.next(), Some(Err(MapError::ConcurrentModification)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_empty_map() {
        let map: ChainMap<u8, u8> = ChainMap::new();
        let mut it = map.iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
