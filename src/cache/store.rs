//! Response Cache Store
//!
//! Key-value store mapping opaque string keys to JSON payloads with per-entry
//! expiry. Keys are built by the callers from request identity (resource path
//! plus pagination parameters); the store itself has no knowledge of key
//! semantics.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == Response Cache ==
/// In-memory read-through cache with TTL expiry.
///
/// Lives for the process lifetime behind `Arc<RwLock<...>>`. Expiry is
/// enforced at `get` time; physical removal timing never affects visibility.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Hit/miss counters
    stats: CacheStats,
    /// Time source for expiry checks
    clock: Arc<dyn Clock>,
}

impl ResponseCache {
    // == Constructors ==
    /// Creates a cache backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a cache with an injected clock, for tests that advance time
    /// manually.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            clock,
        }
    }

    // == Get ==
    /// Retrieves the payload stored under `key`.
    ///
    /// Returns `None` when no entry exists or the entry's expiry timestamp
    /// has passed. Expired entries are lazily evicted on lookup. A miss is a
    /// normal outcome, not an error.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let now = self.clock.now_ms();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired(now) {
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Some(value)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Put ==
    /// Stores `value` under `key` with expiry `now + ttl_ms`, unconditionally
    /// overwriting any prior entry. A `ttl_ms` of zero stores an entry that
    /// is already expired for the next `get`.
    pub fn put(&mut self, key: impl Into<String>, value: Value, ttl_ms: u64) {
        let now = self.clock.now_ms();
        self.entries
            .insert(key.into(), CacheEntry::new(value, now, ttl_ms));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Remove ==
    /// Drops the entry under `key` if present. Returns whether an entry was
    /// removed. Correctness never depends on callers invoking this.
    pub fn remove(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Sweep Expired ==
    /// Removes all entries whose expiry has passed.
    ///
    /// Returns the number of entries removed. Purely an optimization run by
    /// the background task; `get` already treats expired entries as absent.
    pub fn sweep_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        self.stats.set_total_entries(self.entries.len());
        before - self.entries.len()
    }

    // == Stats ==
    /// Returns current hit/miss statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until
    /// they are evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}
