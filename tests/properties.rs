//! Property-based tests for the dictionary helpers.
//!
//! These tests use proptest to generate random dictionaries and verify
//! properties that should always hold true.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use plain_dict::{self as d, Dict, Source};
use proptest::prelude::*;

/// Strategy for generating dictionaries with short lowercase keys
fn dict_strategy() -> impl Strategy<Value = Dict<i32>> {
    prop::collection::vec(("[a-z0-9]{1,6}", any::<i32>()), 0..24)
        .prop_map(|entries| d::from_entries(entries))
}

/// Strategy for generating sorted maps to use as foreign sources
fn btree_strategy() -> impl Strategy<Value = BTreeMap<String, i32>> {
    prop::collection::btree_map("[a-z0-9]{1,6}", any::<i32>(), 0..24)
}

/// Strategy for generating hash maps to use as foreign sources
fn hash_map_strategy() -> impl Strategy<Value = HashMap<String, i32>> {
    prop::collection::hash_map("[a-z0-9]{1,6}", any::<i32>(), 0..24)
}

/// Strategy for generating string-valued dictionaries whose values are unique
fn unique_values_strategy() -> impl Strategy<Value = Dict<String>> {
    (
        prop::collection::btree_set("[a-z]{1,6}", 0..16),
        prop::collection::btree_set("[A-Z]{1,6}", 0..16),
    )
        .prop_map(|(keys, values): (BTreeSet<String>, BTreeSet<String>)| {
            d::from_entries(keys.into_iter().zip(values))
        })
}

proptest! {
    #[test]
    fn test_empty_iff_zero_size(dict in dict_strategy()) {
        prop_assert_eq!(d::is_empty(&dict), d::size(&dict) == 0);
    }

    #[test]
    fn test_create_copies_every_entry(dict in dict_strategy()) {
        let copy = d::create(Source::from(&dict));
        prop_assert_eq!(d::size(&copy), d::size(&dict));
        for (k, v) in &dict {
            prop_assert_eq!(copy.get(k), Some(v));
        }
    }

    #[test]
    fn test_has_matches_keys(dict in dict_strategy(), candidate in "[a-z0-9]{1,6}") {
        let ks = d::keys(&dict);
        prop_assert_eq!(d::has(&dict, &candidate), ks.contains(&candidate.as_str()));
        for k in ks {
            prop_assert!(d::has(&dict, k));
        }
    }

    #[test]
    fn test_key_of_points_at_value(dict in dict_strategy(), candidate in any::<i32>()) {
        match d::key_of(&dict, &candidate) {
            Some(k) => prop_assert_eq!(dict.get(k), Some(&candidate)),
            None => prop_assert!(dict.values().all(|v| *v != candidate)),
        }
    }

    #[test]
    fn test_key_at_matches_keys(dict in dict_strategy(), extra in 0usize..4) {
        let ks = d::keys(&dict);
        for (i, k) in ks.iter().enumerate() {
            prop_assert_eq!(d::key_at(&dict, i), Some(*k));
        }
        prop_assert_eq!(d::key_at(&dict, ks.len() + extra), None);
        prop_assert_eq!(d::first_key(&dict), ks.first().copied());
        prop_assert_eq!(d::last_key(&dict), ks.last().copied());
    }

    #[test]
    fn test_clear_empties_in_place(mut dict in dict_strategy()) {
        let cleared = d::clear(&mut dict);
        prop_assert_eq!(d::size(&*cleared), 0);
        prop_assert!(d::keys(&*cleared).is_empty());
    }

    #[test]
    fn test_invert_round_trip(dict in unique_values_strategy()) {
        let back = d::invert(&d::invert(&dict));
        let before: Vec<_> = dict.iter().collect();
        let after: Vec<_> = back.iter().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_to_map_round_trip(dict in dict_strategy()) {
        let back = d::create(Source::Map(d::to_map(&dict)));
        let before: Vec<_> = dict.iter().collect();
        let after: Vec<_> = back.iter().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_create_copies_btree_source(src in btree_strategy()) {
        let copy = d::create(Source::from(&src));
        prop_assert_eq!(d::size(&copy), d::size(&src));
        for (k, v) in &src {
            prop_assert_eq!(copy.get(k), Some(v));
        }
        prop_assert_eq!(d::keys(&copy), d::keys(&src));
    }

    #[test]
    fn test_create_copies_hash_map_source(src in hash_map_strategy()) {
        let copy = d::create(Source::from(&src));
        prop_assert_eq!(d::size(&copy), d::size(&src));
        for (k, v) in &src {
            prop_assert_eq!(copy.get(k), Some(v));
        }
        prop_assert_eq!(d::keys(&copy), d::keys(&src));
    }

    #[test]
    fn test_key_at_matches_keys_on_foreign_maps(sorted in btree_strategy(), hashed in hash_map_strategy()) {
        let ks = d::keys(&sorted);
        for (i, k) in ks.iter().enumerate() {
            prop_assert_eq!(d::key_at(&sorted, i), Some(*k));
        }
        prop_assert_eq!(d::key_at(&sorted, ks.len()), None);
        prop_assert_eq!(d::last_key(&sorted), ks.last().copied());

        let ks = d::keys(&hashed);
        for (i, k) in ks.iter().enumerate() {
            prop_assert_eq!(d::key_at(&hashed, i), Some(*k));
        }
        prop_assert_eq!(d::key_at(&hashed, ks.len()), None);
        prop_assert_eq!(d::first_key(&hashed), ks.first().copied());
    }
}
