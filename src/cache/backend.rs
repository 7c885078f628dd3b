//! Cache Backend Module
//!
//! The key-value contract the read-through helper relies on, and the
//! in-process implementation used by the server.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::CacheError;

// == Cache Backend Trait ==
/// Key-value store with get / set-with-expiry semantics.
///
/// Implementations must be safe to share across concurrent requests. A
/// missing or expired key is reported as `Ok(None)`; `Err` is reserved for
/// the backend itself misbehaving.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Returns the serialized value stored under `key`, if live.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Stores `value` under `key` for `ttl_seconds`.
    async fn set_ex(&self, key: &str, ttl_seconds: u64, value: String) -> Result<(), CacheError>;

    /// Removes `key`. Returns true if an entry was removed.
    async fn del(&self, key: &str) -> Result<bool, CacheError>;

    /// Drops every entry. Returns the number removed.
    async fn flush(&self) -> Result<usize, CacheError>;
}

// == Memory Cache ==
/// In-process backend over a shared [`CacheStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<CacheStore>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the underlying store, used by the cleanup task.
    pub fn store(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.store)
    }

    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}

#[async_trait]
impl CacheBackend for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        // Write lock: an expired entry is removed on lookup and stats change
        let mut store = self.store.write().await;
        match store.get(key) {
            Ok(entry) => {
                debug!(
                    key,
                    age_ms = entry.age_ms(),
                    ttl_ms = entry.ttl_remaining_ms(),
                    "cache entry found"
                );
                Ok(Some(entry.value))
            }
            Err(CacheError::NotFound(_)) | Err(CacheError::Expired(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn set_ex(&self, key: &str, ttl_seconds: u64, value: String) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.set(key.to_string(), value, ttl_seconds);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<bool, CacheError> {
        let mut store = self.store.write().await;
        Ok(store.delete(key))
    }

    async fn flush(&self) -> Result<usize, CacheError> {
        let mut store = self.store.write().await;
        Ok(store.clear())
    }
}
