//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check codec fidelity, digest determinism and
//! set/get/keys/delete behavior against the in-memory store.

use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use crate::cache::{codec, Cache, CacheClient};
use crate::store::MemoryStore;

// == Strategies ==
/// Generates cache keys in a `namespace:id` shape
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}:[a-zA-Z0-9_]{1,16}"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(|f| Value::Number(Number::from_f64(f).unwrap())),
        ".{0,32}".prop_map(Value::String),
    ]
}

/// Generates arbitrary nested maps and sequences of scalars
fn value_strategy() -> impl Strategy<Value = Value> {
    scalar_strategy().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_]{1,12}", inner, 0..8)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: u8,
    active: bool,
    score: f64,
    tags: Vec<String>,
    limits: BTreeMap<String, i32>,
    manager: Option<String>,
}

fn profile_strategy() -> impl Strategy<Value = Profile> {
    (
        ".{0,24}",
        any::<u8>(),
        any::<bool>(),
        -1.0e6f64..1.0e6,
        prop::collection::vec("[a-z]{0,10}", 0..5),
        prop::collection::btree_map("[a-z]{1,8}", any::<i32>(), 0..5),
        prop::option::of("[A-Z][a-z]{1,10}"),
    )
        .prop_map(|(name, age, active, score, tags, limits, manager)| Profile {
            name,
            age,
            active,
            score,
            tags,
            limits,
            manager,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Property: decoding an encoded dynamic value reproduces it exactly.
    #[test]
    fn prop_codec_roundtrip_dynamic(value in value_strategy()) {
        let bytes = codec::encode(&value).unwrap();
        let decoded: Value = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, value);
    }

    // Property: typed structs survive the round trip field for field.
    #[test]
    fn prop_codec_roundtrip_struct(profile in profile_strategy()) {
        let bytes = codec::encode(&profile).unwrap();
        let decoded: Profile = codec::decode(&bytes).unwrap();
        prop_assert_eq!(decoded, profile);
    }

    // Property: equal encodings give equal digests, and the digest is the
    // MD5 of exactly those bytes.
    #[test]
    fn prop_hash_follows_encoding(value in value_strategy()) {
        let cache = Cache::new(MemoryStore::new());
        let copy = value.clone();

        let digest = cache.hash(&value);
        prop_assert_eq!(&digest, &cache.hash(&copy));
        prop_assert_eq!(&digest, &codec::digest(&codec::encode(&value).unwrap()));
        prop_assert_eq!(digest.len(), 32);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    // Property: a value set under a key is returned by the next get.
    #[test]
    fn prop_set_then_get(key in key_strategy(), profile in profile_strategy()) {
        let cache = Cache::new(MemoryStore::new());

        let loaded: Profile = tokio_test::block_on(async {
            cache.set(&key, &profile, Duration::from_secs(60)).await.unwrap();
            cache.get(&key).await.unwrap()
        });

        prop_assert_eq!(loaded, profile);
    }

    // Property: a prefix pattern lists exactly the keys under that prefix.
    #[test]
    fn prop_get_keys_prefix(
        keys in prop::collection::hash_set(key_strategy(), 0..20),
        prefix in "[a-z]{1,8}"
    ) {
        let cache = Cache::new(MemoryStore::new());

        let listed: HashSet<String> = tokio_test::block_on(async {
            for key in &keys {
                cache.set(key, &true, Duration::ZERO).await.unwrap();
            }
            cache.get_keys(&format!("{}:*", prefix)).await.unwrap()
        })
        .into_iter()
        .collect();

        let expected: HashSet<String> = keys
            .iter()
            .filter(|k| k.starts_with(&format!("{}:", prefix)))
            .cloned()
            .collect();
        prop_assert_eq!(listed, expected);
    }

    // Property: deleted keys are gone, other keys are untouched.
    #[test]
    fn prop_delete_removes_only_given_keys(
        keys in prop::collection::hash_set(key_strategy(), 1..20),
        split in any::<prop::sample::Index>()
    ) {
        let cache = Cache::new(MemoryStore::new());
        let keys: Vec<String> = keys.into_iter().collect();
        let (deleted, kept) = keys.split_at(split.index(keys.len() + 1));

        tokio_test::block_on(async {
            for key in &keys {
                cache.set(key, &key.len(), Duration::ZERO).await.unwrap();
            }
            cache.delete(deleted).await.unwrap();

            for key in deleted {
                assert!(cache.get::<usize>(key).await.unwrap_err().is_not_found());
            }
            for key in kept {
                assert_eq!(cache.get::<usize>(key).await.unwrap(), key.len());
            }
        });
    }
}
