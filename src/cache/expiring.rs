//! Expiring Cache Module
//!
//! The shared, thread-safe handle the rest of the client talks to.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore, MIN_SWEEP_INTERVAL};
use crate::tasks::{spawn_sweep_task, spawn_sweep_thread};

// == Expiring Cache ==
/// A string-keyed byte cache whose entries expire after a fixed TTL.
///
/// Cloning is cheap and every clone shares the same storage. All reads and
/// writes go through one mutex, which the background sweep also takes for its
/// whole pass, so no caller ever sees a half-finished sweep.
///
/// A `get` never returns an entry older than the TTL. Stale entries stay in
/// memory until the next sweep tick removes them.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache whose sweep runs once every `ttl`.
    ///
    /// Inside a Tokio runtime the sweep is spawned onto it; elsewhere it runs
    /// on its own thread. Either way this call returns immediately.
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Creates an empty cache with a sweep interval other than the TTL.
    ///
    /// A shorter interval tightens how long stale entries linger in memory.
    /// Intervals below one millisecond are raised to one millisecond.
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let sweep_interval = sweep_interval.max(MIN_SWEEP_INTERVAL);

        let weak = Arc::downgrade(&store);
        if Handle::try_current().is_ok() {
            spawn_sweep_task(weak, ttl, sweep_interval);
        } else {
            spawn_sweep_thread(weak, ttl, sweep_interval);
        }

        Self { store, ttl }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value and resetting
    /// its age.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        let value = value.into();
        debug!("cache set: {} ({} bytes)", key, value.len());
        self.store.lock().insert(key, value);
    }

    // == Get ==
    /// Returns the value under `key` if a live entry exists.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.lock().lookup(key, self.ttl);
        debug!(
            "cache {}: {}",
            if value.is_some() { "hit" } else { "miss" },
            key
        );
        value
    }

    /// The TTL every entry is held to.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of stored entries, including stale ones not yet swept.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Snapshot of lookup and sweep counters.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }
}
