//! Property-based checks of the index against `BTreeMap` as the oracle.

use std::collections::BTreeMap;

use proptest::prelude::*;

use art_index::ArtIndex;

/// Short lowercase keys, empty ones included, with plenty of shared prefixes
/// so splits, growth, and collapse all get exercised.
fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c]{0,8}", 0..64)
}

fn walked_keys(tree: &ArtIndex<usize>) -> Vec<Vec<u8>> {
    tree.iter()
        .filter_map(|node| node.key().map(<[u8]>::to_vec))
        .collect()
}

proptest! {
    #[test]
    fn inserted_keys_are_retrievable(keys in arb_keys()) {
        let mut tree = ArtIndex::new();
        let mut oracle = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            let replaced = tree.insert(key.as_str(), i);
            prop_assert_eq!(replaced, oracle.insert(key.clone(), i));
        }
        prop_assert_eq!(tree.len(), oracle.len());
        for (key, value) in &oracle {
            prop_assert_eq!(tree.get(key.as_str()), Some(value));
        }
    }

    #[test]
    fn traversal_is_sorted_and_complete(keys in arb_keys()) {
        let mut tree = ArtIndex::new();
        let mut oracle = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key.as_str(), i);
            oracle.insert(key.as_bytes().to_vec(), i);
        }
        let expected: Vec<Vec<u8>> = oracle.keys().cloned().collect();
        prop_assert_eq!(walked_keys(&tree), expected);
    }

    #[test]
    fn scan_matches_the_filtered_oracle(keys in arb_keys(), prefix in "[a-c]{0,3}") {
        let mut tree = ArtIndex::new();
        let mut oracle = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key.as_str(), i);
            oracle.insert(key.as_bytes().to_vec(), i);
        }
        let mut scanned = Vec::new();
        tree.scan(prefix.as_str(), |node| {
            if let Some(key) = node.key() {
                scanned.push(key.to_vec());
            }
        });
        let expected: Vec<Vec<u8>> = oracle
            .keys()
            .filter(|k| k.starts_with(prefix.as_bytes()))
            .cloned()
            .collect();
        prop_assert_eq!(scanned, expected);
    }

    #[test]
    fn removal_tracks_the_oracle(keys in arb_keys(), victims in arb_keys()) {
        let mut tree = ArtIndex::new();
        let mut oracle = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key.as_str(), i);
            oracle.insert(key.clone(), i);
        }
        for key in &victims {
            prop_assert_eq!(tree.remove(key.as_str()), oracle.remove(key));
        }
        prop_assert_eq!(tree.len(), oracle.len());
        for (key, value) in &oracle {
            prop_assert_eq!(tree.get(key.as_str()), Some(value));
        }
        let expected: Vec<Vec<u8>> = oracle.keys().map(|k| k.as_bytes().to_vec()).collect();
        prop_assert_eq!(walked_keys(&tree), expected);
    }

    #[test]
    fn draining_leaves_an_empty_tree(keys in arb_keys()) {
        let mut tree = ArtIndex::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key.as_str(), i);
        }
        let mut unique: Vec<&String> = keys.iter().collect();
        unique.sort();
        unique.dedup();
        for key in unique {
            prop_assert!(tree.remove(key.as_str()).is_some());
        }
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn every_node_is_yielded_exactly_once(keys in arb_keys()) {
        let mut tree = ArtIndex::new();
        for (i, key) in keys.iter().enumerate() {
            tree.insert(key.as_str(), i);
        }
        let stats = tree.stats();
        prop_assert_eq!(
            tree.iter().count(),
            stats.num_leaves + stats.num_inner_nodes()
        );
        prop_assert_eq!(stats.num_leaves, tree.len());
    }
}
