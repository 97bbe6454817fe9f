//! Cache Module
//!
//! Provides in-memory caching of raw API responses with TTL expiration.

mod entry;
mod expiring;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;

use std::time::Duration;

// == Public Constants ==
/// Shortest interval the background sweep may run at
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);
