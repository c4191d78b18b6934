//! In-memory response cache backed by `moka::sync::Cache`.
//!
//! Entries expire a fixed time after they are written (reads do not extend
//! their life), and the store holds at most `max_entries` responses. Moka
//! evicts with TinyLFU admission and LRU ordering once the bound is reached.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use crate::request::CacheKey;
use crate::types::WeatherResponse;

pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// Bounded, write-time-expiring store of assembled responses.
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Clone)]
pub struct CacheStore {
    inner: Cache<CacheKey, Arc<WeatherResponse>>,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();

        Self { inner, ttl }
    }

    /// Look up a live entry. Expired entries are reported as absent.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<WeatherResponse>> {
        self.inner.get(key)
    }

    /// Store a response, replacing any existing entry for the key.
    pub fn put(&self, key: CacheKey, value: WeatherResponse) {
        self.inner.insert(key, Arc::new(value));
    }

    /// Number of live entries after pending evictions are applied.
    pub fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks();
        self.inner.entry_count()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}

impl std::fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheStore")
            .field("max_entries", &self.inner.policy().max_capacity())
            .field("ttl", &self.ttl)
            .finish()
    }
}
