use keyset::{balanced, flat, sorted, unbalanced, Collection, Key};

use std::collections::{BTreeSet, HashSet};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// The source workload: a couple hundred keys drawn from `1..1000`.
const NUM_KEYS: usize = 200;
const KEY_RANGE: std::ops::Range<Key> = 1..1000;

fn random_keys(seed: u64) -> Vec<Key> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..NUM_KEYS).map(|_| rng.gen_range(KEY_RANGE)).collect()
}

fn every_collection() -> Vec<(&'static str, Box<dyn Collection>)> {
    vec![
        ("balanced", Box::new(balanced::Tree::new())),
        ("unbalanced", Box::new(unbalanced::Tree::new())),
        ("sorted", Box::new(sorted::SortedArray::new())),
        ("flat", Box::new(flat::FlatArray::with_capacity(NUM_KEYS + 10))),
    ]
}

/// Trees hold each key once; arrays hold every insert.
fn is_tree(name: &str) -> bool {
    matches!(name, "balanced" | "unbalanced")
}

#[test]
fn insert_then_find() {
    let keys = random_keys(0);
    for (name, mut collection) in every_collection() {
        for key in &keys {
            collection.insert(*key).unwrap();
        }

        assert!(keys.iter().all(|k| collection.find(*k)), "{name}");
        assert!(!collection.find(0), "{name}");
        assert!(!collection.find(1000), "{name}");

        let expected = if is_tree(name) {
            keys.iter().collect::<HashSet<_>>().len()
        } else {
            keys.len()
        };
        assert_eq!(collection.len(), expected, "{name}");
        assert_eq!(collection.traverse().count(), expected, "{name}");
    }
}

#[test]
fn trees_traverse_in_ascending_order() {
    let keys = random_keys(1);
    let expected: Vec<Key> = keys.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    for (name, mut collection) in every_collection().into_iter().filter(|(n, _)| is_tree(n)) {
        for key in &keys {
            collection.insert(*key).unwrap();
        }
        assert_eq!(collection.traverse().collect::<Vec<_>>(), expected, "{name}");
    }
}

#[test]
fn remove_then_find() {
    let keys = random_keys(2);
    for (name, mut collection) in every_collection() {
        for key in &keys {
            collection.insert(*key).unwrap();
        }
        for key in &keys {
            // Arrays keep duplicates, so drain every copy.
            while collection.remove(*key) {}
            assert!(!collection.find(*key), "{name}");
            assert!(collection.traverse().all(|k| k != *key), "{name}");
        }

        assert!(collection.is_empty(), "{name}");
        assert!(!collection.remove(30), "{name}");
    }
}

#[test]
fn empty_collections() {
    for (name, mut collection) in every_collection() {
        assert!(!collection.find(90), "{name}");
        assert!(!collection.remove(30), "{name}");
        assert!(collection.is_empty(), "{name}");
        assert_eq!(collection.traverse().next(), None, "{name}");
    }
}

#[test]
fn full_flat_array_reports_capacity() {
    let mut collection: Box<dyn Collection> = Box::new(flat::FlatArray::with_capacity(1));

    collection.insert(1).unwrap();
    assert_eq!(
        collection.insert(2),
        Err(keyset::Error::CapacityExceeded { capacity: 1 })
    );
    assert_eq!(
        collection.insert(2).unwrap_err().to_string(),
        "collection is full: capacity of 1 keys reached"
    );
}

quickcheck::quickcheck! {
    fn trees_agree(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut balanced = balanced::Tree::new();
        let mut unbalanced = unbalanced::Tree::new();
        for x in &xs {
            balanced.insert(Key::from(*x));
            unbalanced.insert(Key::from(*x));
        }
        for delete in &deletes {
            balanced.remove(Key::from(*delete));
            unbalanced.remove(Key::from(*delete));
        }

        balanced.infix().eq(unbalanced.infix()) && balanced.len() == unbalanced.len()
    }
}

quickcheck::quickcheck! {
    fn sorted_array_sorts_what_flat_array_holds(xs: Vec<Key>) -> bool {
        let mut sorted = sorted::SortedArray::new();
        let mut flat = flat::FlatArray::with_capacity(xs.len());
        for x in &xs {
            sorted.insert(*x);
            if flat.insert(*x).is_err() {
                return false;
            }
        }
        sorted.sort();

        let mut expected: Vec<_> = flat.keys().collect();
        expected.sort_unstable();
        sorted.keys().eq(expected)
    }
}
