//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a plain HashMap model.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::ExpiringCache;

// == Test Configuration ==
/// Long enough that nothing expires while a case runs
const TEST_TTL: Duration = Duration::from_secs(3600);

// == Strategies ==
/// Generates URL-ish cache keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9/:._-]{0,40}".prop_map(|s| s)
}

/// Generates arbitrary byte payloads
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    // Small key space so sets and gets collide often
    let key = "[a-e]{1,2}";
    prop_oneof![
        (key, value_strategy()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        key.prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of sets and gets behaves like a HashMap, and the hit and
    // miss counters agree with what the model saw.
    #[test]
    fn prop_matches_hashmap_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        tokio_test::block_on(async {
            let cache = ExpiringCache::new(TEST_TTL);
            let mut model: HashMap<String, Vec<u8>> = HashMap::new();
            let mut hits = 0u64;
            let mut misses = 0u64;

            for op in ops {
                match op {
                    CacheOp::Set { key, value } => {
                        cache.set(key.clone(), value.clone());
                        model.insert(key, value);
                    }
                    CacheOp::Get { key } => {
                        let expected = model.get(&key).map(|v| Bytes::from(v.clone()));
                        if expected.is_some() { hits += 1 } else { misses += 1 }
                        prop_assert_eq!(cache.get(&key), expected);
                    }
                }
            }

            let stats = cache.stats();
            prop_assert_eq!(stats.hits, hits);
            prop_assert_eq!(stats.misses, misses);
            prop_assert_eq!(cache.len(), model.len());
            Ok(())
        })?;
    }

    #[test]
    fn prop_read_back(key in key_strategy(), value in value_strategy()) {
        tokio_test::block_on(async {
            let cache = ExpiringCache::new(TEST_TTL);

            cache.set(key.clone(), value.clone());

            prop_assert_eq!(cache.get(&key), Some(Bytes::from(value)));
            Ok(())
        })?;
    }

    #[test]
    fn prop_overwrite_replaces(
        key in key_strategy(),
        first in value_strategy(),
        second in value_strategy(),
    ) {
        tokio_test::block_on(async {
            let cache = ExpiringCache::new(TEST_TTL);

            cache.set(key.clone(), first);
            cache.set(key.clone(), second.clone());

            prop_assert_eq!(cache.get(&key), Some(Bytes::from(second)));
            prop_assert_eq!(cache.len(), 1);
            Ok(())
        })?;
    }

    // Writing one key never disturbs the others.
    #[test]
    fn prop_keys_are_isolated(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 2..20),
        replacement in value_strategy(),
    ) {
        tokio_test::block_on(async {
            let cache = ExpiringCache::new(TEST_TTL);
            for (key, value) in &entries {
                cache.set(key.clone(), value.clone());
            }

            let touched = entries.keys().next().cloned().unwrap_or_default();
            cache.set(touched.clone(), replacement.clone());

            for (key, value) in &entries {
                let expected = if *key == touched { &replacement } else { value };
                prop_assert_eq!(cache.get(key), Some(Bytes::from(expected.clone())));
            }
            Ok(())
        })?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    // Readers racing writers only ever see complete values that some writer
    // stored, and the final state holds one of the written values per key.
    #[test]
    fn prop_concurrent_writes_are_atomic(
        writes in prop::collection::vec((0usize..4, value_strategy()), 4..40),
    ) {
        tokio_test::block_on(async {
            let cache = ExpiringCache::new(TEST_TTL);
            let keys: Vec<String> = (0..4).map(|i| format!("http://x/{}", i)).collect();
            let written: Arc<HashSet<(usize, Vec<u8>)>> =
                Arc::new(writes.iter().cloned().collect());

            thread::scope(|scope| {
                for chunk in writes.chunks(4) {
                    let cache = cache.clone();
                    let keys = &keys;
                    let written = Arc::clone(&written);
                    scope.spawn(move || {
                        for (slot, value) in chunk {
                            cache.set(keys[*slot].clone(), value.clone());
                            for (i, key) in keys.iter().enumerate() {
                                if let Some(seen) = cache.get(key) {
                                    assert!(written.contains(&(i, seen.to_vec())));
                                }
                            }
                        }
                    });
                }
            });

            for (i, key) in keys.iter().enumerate() {
                let wrote_here = writes.iter().any(|(slot, _)| *slot == i);
                match cache.get(key) {
                    Some(value) => prop_assert!(written.contains(&(i, value.to_vec()))),
                    None => prop_assert!(!wrote_here),
                }
            }
            Ok(())
        })?;
    }
}
