//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Weak;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task sleeps for `interval`, then takes the store lock once and removes
/// every entry older than `ttl` before releasing it. It holds only a weak
/// reference, so it exits on the first tick after the last cache handle is
/// dropped. Otherwise it runs until the runtime shuts down.
///
/// Must be called from within a Tokio runtime; see [`spawn_sweep_thread`]
/// for callers without one.
///
/// # Arguments
/// * `store` - Weak reference to the shared store
/// * `ttl` - Age beyond which an entry is removed
/// * `interval` - Time between sweeps
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let handle = spawn_sweep_task(Arc::downgrade(&store), ttl, ttl);
/// ```
pub fn spawn_sweep_task(
    store: Weak<Mutex<CacheStore>>,
    ttl: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!(
            "Starting cache sweep task: ttl={:?}, interval={:?}",
            ttl, interval
        );

        loop {
            tokio::time::sleep(interval).await;
            if !sweep_once(&store, ttl) {
                break;
            }
        }
    })
}

/// Runs the same sweep loop on a dedicated OS thread.
///
/// Used when no Tokio runtime is available. Returns None, and leaves the
/// cache without a sweep, if the thread cannot be started; stale entries are
/// then still hidden from reads but never reclaimed.
pub fn spawn_sweep_thread(
    store: Weak<Mutex<CacheStore>>,
    ttl: Duration,
    interval: Duration,
) -> Option<thread::JoinHandle<()>> {
    let spawned = thread::Builder::new()
        .name("cache-sweep".to_string())
        .spawn(move || {
            debug!(
                "Starting cache sweep thread: ttl={:?}, interval={:?}",
                ttl, interval
            );

            loop {
                thread::sleep(interval);
                if !sweep_once(&store, ttl) {
                    break;
                }
            }
        });

    match spawned {
        Ok(handle) => Some(handle),
        Err(err) => {
            warn!("Could not start cache sweep thread: {}", err);
            None
        }
    }
}

/// One sweep pass. Returns false once the store has been dropped.
fn sweep_once(store: &Weak<Mutex<CacheStore>>, ttl: Duration) -> bool {
    let Some(store) = store.upgrade() else {
        debug!("Cache dropped, stopping sweep");
        return false;
    };

    // One critical section per pass
    let (removed, remaining) = {
        let mut guard = store.lock();
        let removed = guard.purge_expired(ttl);
        (removed, guard.len())
    };

    if removed > 0 {
        info!(
            "Cache sweep: removed {} expired entries, {} remaining",
            removed, remaining
        );
    } else {
        debug!("Cache sweep: no expired entries found");
    }
    true
}
