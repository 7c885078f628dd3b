//! Read-Through Cache Module
//!
//! A single entry point that serves a live cached value or computes, stores
//! and returns a fresh one.

use std::future::Future;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::cache::CacheBackend;
use crate::error::CacheError;

// == Read-Through Cache ==
/// Read-through helper over any [`CacheBackend`].
///
/// Cache faults are logged and never returned: a broken backend degrades to
/// computing every value directly. Concurrent misses on one key are not
/// de-duplicated; each computes and the last write wins.
#[derive(Clone)]
pub struct ReadThroughCache {
    backend: Arc<dyn CacheBackend>,
    /// Lifetime of stored values in seconds
    expiration: u64,
}

impl ReadThroughCache {
    /// Creates a helper storing values for `expiration` seconds.
    pub fn new(backend: Arc<dyn CacheBackend>, expiration: u64) -> Self {
        Self {
            backend,
            expiration,
        }
    }

    // == Get Or Compute ==
    /// Returns the live value under `key`, or computes and caches one.
    ///
    /// `compute` runs at most once, and only on a miss. Its `Ok` result is
    /// what gets cached. Its `Err` is returned as-is and nothing is written.
    pub async fn get_or_compute<T, E, F, Fut>(&self, key: &str, compute: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        match self.backend.get(key).await {
            Ok(Some(raw)) => match decode::<T>(&raw) {
                Ok(value) => {
                    info!(key, "Cache hit");
                    return Ok(value);
                }
                Err(err) => warn!(key, error = %err, "Malformed cache entry, recomputing"),
            },
            Ok(None) => info!(key, "Cache miss"),
            Err(err) => warn!(key, error = %err, "Cache lookup failed, computing directly"),
        }

        let fresh = compute().await?;
        if let Err(err) = self.populate(key, &fresh).await {
            warn!(key, error = %err, "Failed to store value in cache");
        }
        Ok(fresh)
    }

    async fn populate<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let serialized = serde_json::to_string(value)?;
        self.backend.set_ex(key, self.expiration, serialized).await
    }

    // == Invalidate ==
    /// Removes `key` so the next read recomputes it. Best effort.
    pub async fn invalidate(&self, key: &str) {
        match self.backend.del(key).await {
            Ok(true) => info!(key, "Cache invalidated"),
            Ok(false) => {}
            Err(err) => warn!(key, error = %err, "Cache invalidation failed"),
        }
    }

    /// Drops every cached value. Best effort.
    pub async fn clear(&self) {
        match self.backend.flush().await {
            Ok(removed) => info!(removed, "Cache flushed"),
            Err(err) => warn!(error = %err, "Cache flush failed"),
        }
    }
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, CacheError> {
    Ok(serde_json::from_str(raw)?)
}
