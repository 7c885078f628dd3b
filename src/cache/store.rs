//! Cache Store Module
//!
//! Key-value map of serialized values with per-entry expiration.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};
use crate::error::CacheError;

// == Cache Store ==
/// In-memory cache storage with TTL support.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup statistics
    stats: CacheStats,
}

impl CacheStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a value for `ttl` seconds.
    ///
    /// If the key already exists, the value is overwritten and the deadline
    /// restarts.
    pub fn set(&mut self, key: String, value: String, ttl: u64) {
        self.entries.insert(key, CacheEntry::new(value, ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves a live entry by key.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Result<CacheEntry, CacheError> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                Err(CacheError::Expired(key.to_string()))
            }
            Some(entry) => {
                let entry = entry.clone();
                self.stats.record_hit();
                Ok(entry)
            }
            None => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key. Returns true if something was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Clear ==
    /// Drops every entry, keeping the counters.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let count = before - self.entries.len();

        self.stats.record_expirations(count);
        self.stats.set_total_entries(self.entries.len());
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}
