//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and the read-through
//! helper used by the cached listing endpoint.

mod backend;
mod entry;
mod read_through;
mod stats;
mod store;


// Re-export public types
pub use backend::{CacheBackend, MemoryCache};
pub use entry::CacheEntry;
pub use read_through::ReadThroughCache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Cache key holding the full book listing
pub const BOOKS_CACHE_KEY: &str = "books";
