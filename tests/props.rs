use std::collections::HashMap as StdHashMap;

use longmap::{LongHashMap, LongMap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Put(i64, u16),
    PutAbsent(i64),
    Remove(i64),
    Clear,
}

// Small key space so chains collide and removals hit.
fn key() -> impl Strategy<Value = i64> {
    prop_oneof![
        8 => -64i64..64,
        1 => any::<i64>(),
        1 => Just(i64::MIN),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        10 => (key(), any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => key().prop_map(Op::PutAbsent),
        5 => key().prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn check_against(map: &LongHashMap<u16>, model: &StdHashMap<i64, u16>) {
    assert_eq!(map.size(), model.len());
    assert_eq!(map.is_empty(), model.is_empty());
    assert!(map.capacity().is_power_of_two());

    match (map.keys(), map.values()) {
        (None, None) => assert!(model.is_empty()),
        (Some(keys), Some(values)) => {
            assert_eq!(keys.len(), model.len());
            assert_eq!(values.len(), model.len());
            for (key, value) in keys.iter().zip(values) {
                assert_eq!(model.get(key), Some(value), "key: {key}");
            }
        }
        (keys, values) => panic!("keys {keys:?} and values {values:?} disagree"),
    }

    for (key, value) in model {
        assert_eq!(map.get(*key), Some(value), "key: {key}");
        assert!(map.contains_key(*key));
        assert!(map.contains_value(value));
    }
}

proptest! {
    #[test]
    fn behaves_like_std(ops in proptest::collection::vec(op(), 1..400)) {
        let mut map: LongHashMap<u16> = LongHashMap::new();
        let mut model = StdHashMap::new();
        let mut capacity = map.capacity();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(map.put(k, v).unwrap(), model.insert(k, v));
                }
                Op::PutAbsent(k) => {
                    prop_assert!(map.put(k, None::<u16>).is_err());
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(k), model.remove(&k));
                }
                Op::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            prop_assert!(map.capacity() >= capacity);
            capacity = map.capacity();
        }

        check_against(&map, &model);
    }

    #[test]
    fn growth_matches_load_factor(keys in proptest::collection::hash_set(any::<i64>(), 0..300)) {
        let mut map = LongHashMap::new();
        for key in &keys {
            let before = map.capacity();
            let size = map.size();
            map.insert(*key, 0u8);
            if size == before * 3 / 4 {
                prop_assert_eq!(map.capacity(), before * 2);
            } else {
                prop_assert_eq!(map.capacity(), before);
            }
        }
        prop_assert_eq!(map.size(), keys.len());
        for key in &keys {
            prop_assert!(map.contains_key(*key));
        }
    }

    #[test]
    fn keys_and_values_line_up(entries in proptest::collection::hash_map(key(), any::<u16>(), 1..200)) {
        let map: LongHashMap<u16> = entries.clone().into_iter().collect();
        let keys = map.keys().unwrap();
        let values = map.values().unwrap();
        let iterated: Vec<(i64, u16)> = map.iter().map(|(k, v)| (k, *v)).collect();
        let exported: Vec<(i64, u16)> = keys.into_iter().zip(values.into_iter().copied()).collect();
        prop_assert_eq!(iterated, exported);

        let copy = map.clone();
        prop_assert_eq!(&copy, &map);
        prop_assert_eq!(copy.keys(), map.keys());
    }
}
