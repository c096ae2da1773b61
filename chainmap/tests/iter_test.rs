use chainmap::{ChainMap, Dictionary, MapError};

fn sample(buckets: usize, n: u32) -> ChainMap<u32, u32> {
    let map = ChainMap::with_buckets(buckets).unwrap();
    for i in 0..n {
        map.insert(i, i * 2).unwrap();
    }
    map
}

#[test]
fn test_iter_visits_every_entry_once() {
    let map = sample(8, 200);
    let mut entries: Vec<_> = map.iter().map(Result::unwrap).collect();
    assert_eq!(entries.len(), 200);

    entries.sort_by_key(|(k, _)| *k);
    let expected: Vec<_> = (0..200).map(|i| (i, i * 2)).collect();
    assert_eq!(entries, expected);
}

#[test]
fn test_iter_order_matches_views() {
    let map = sample(5, 50);
    let keys: Vec<_> = map.iter().map(|r| r.unwrap().0).collect();
    assert_eq!(keys, map.keys());
}

#[test]
fn test_each_iter_is_fresh() {
    let map = sample(4, 10);
    let mut first = map.iter();
    first.next();
    first.next();
    assert_eq!(map.iter().count(), 10);
    assert_eq!(first.count(), 8);
}

#[test]
fn test_insert_during_iteration() {
    let map = sample(4, 10);
    let mut it = map.iter();
    assert!(it.next().unwrap().is_ok());

    map.insert(100, 0).unwrap();
    assert_eq!(it.next(), Some(Err(MapError::ConcurrentModification)));
    assert_eq!(it.next(), None);
}

#[test]
fn test_mutation_after_last_item() {
    let map = sample(4, 10);
    let mut it = map.iter();
    for _ in 0..10 {
        assert!(it.next().unwrap().is_ok());
    }

    map.insert(100, 0).unwrap();
    assert_eq!(it.next(), Some(Err(MapError::ConcurrentModification)));
    assert_eq!(it.next(), None);
}

#[test]
fn test_exhausted_without_mutation() {
    let map = sample(4, 10);
    let mut it = map.iter();
    assert_eq!(it.by_ref().filter(Result::is_ok).count(), 10);
    assert_eq!(it.next(), None);
}

#[test]
fn test_remove_during_iteration() {
    let map = sample(4, 10);
    let mut it = map.iter();
    let (key, _) = it.next().unwrap().unwrap();

    assert!(map.remove(&key));
    assert_eq!(it.next(), Some(Err(MapError::ConcurrentModification)));
}

#[test]
fn test_value_update_during_iteration() {
    let map = sample(4, 10);
    let mut it = map.iter();
    it.next();

    map.set(3, 999).unwrap();
    assert_eq!(it.next(), Some(Err(MapError::ConcurrentModification)));
}

#[test]
fn test_clear_during_iteration() {
    let map = sample(4, 10);
    let mut it = map.iter();
    it.next();

    map.clear();
    assert_eq!(it.next(), Some(Err(MapError::ConcurrentModification)));
}

#[test]
fn test_failed_mutation_does_not_invalidate() {
    let map = sample(4, 10);
    let mut it = map.iter();
    it.next();

    assert_eq!(map.insert(0, 1), Err(MapError::DuplicateKey));
    assert!(!map.remove(&12345));
    assert_eq!(it.filter(Result::is_ok).count(), 9);
}

#[test]
fn test_reads_during_iteration() {
    let map = sample(4, 10);
    let mut n = 0;
    for entry in &map {
        let (k, v) = entry.unwrap();
        assert_eq!(map.get(&k), Ok(v));
        assert!(map.contains_key(&k));
        let _ = map.keys();
        n += 1;
    }
    assert_eq!(n, 10);
}

#[test]
fn test_collect_surfaces_error() {
    let map = sample(2, 6);
    let result: Result<Vec<_>, MapError> = map
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if i == 2 {
                map.remove(&0);
            }
            entry
        })
        .collect();
    assert_eq!(result, Err(MapError::ConcurrentModification));
}

#[test]
fn test_abandoned_iterator() {
    let map = sample(4, 10);
    {
        let mut it = map.iter();
        it.next();
    }
    let version = map.version();
    assert_eq!(map.len(), 10);
    map.insert(50, 0).unwrap();
    assert_eq!(map.version(), version + 1);
}

#[test]
fn test_trait_iterator() {
    fn drain_sum<D: Dictionary<u32, u32>>(dict: &D) -> Result<u32, MapError> {
        let mut sum = 0;
        for entry in dict.iter() {
            sum += entry?.1;
        }
        Ok(sum)
    }

    let map = sample(3, 5);
    assert_eq!(drain_sum(&map), Ok(20));
}
