//! Cache Entry Module
//!
//! Defines the structure for individual cache entries. Every entry carries an
//! expiration deadline; there is no eviction other than expiry.

use std::time::Duration;

use tokio::time::Instant;

/// Longest lifetime an entry can be given. Larger TTLs are clamped.
const MAX_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// Represents a single cache entry holding a serialized value.
///
/// Deadlines are measured on the monotonic tokio clock, so a wall clock
/// adjustment never stretches or shortens an entry's lifetime.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value, serialized JSON
    pub value: String,
    /// When the entry was stored
    pub created_at: Instant,
    /// When the entry stops being served
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that lives for `ttl_seconds`.
    pub fn new(value: String, ttl_seconds: u64) -> Self {
        let now = Instant::now();
        let ttl = Duration::from_secs(ttl_seconds).min(MAX_TTL);

        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time reaches the deadline, so a
    /// zero TTL produces an entry that is never served.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        as_millis(self.expires_at.saturating_duration_since(Instant::now()))
    }

    /// Returns the age of the entry in milliseconds.
    pub fn age_ms(&self) -> u64 {
        as_millis(Instant::now().saturating_duration_since(self.created_at))
    }
}

fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::advance;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation() {
        let entry = CacheEntry::new("[]".to_string(), 60);

        assert_eq!(entry.value, "[]");
        assert_eq!(entry.expires_at - entry.created_at, Duration::from_secs(60));
        assert!(!entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let entry = CacheEntry::new("[]".to_string(), 1);

        advance(Duration::from_millis(999)).await;
        assert!(!entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), 1);
        assert_eq!(entry.age_ms(), 999);

        advance(Duration::from_millis(1)).await;
        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new("[]".to_string(), 10);

        assert_eq!(entry.ttl_remaining_ms(), 10_000);
        advance(Duration::from_secs(4)).await;
        assert_eq!(entry.ttl_remaining_ms(), 6_000);
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let entry = CacheEntry::new("[]".to_string(), 0);
        assert!(entry.is_expired());
    }

    #[test]
    fn test_huge_ttl_is_clamped() {
        let entry = CacheEntry::new("[]".to_string(), u64::MAX);
        assert_eq!(entry.expires_at - entry.created_at, MAX_TTL);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry {
            value: "[]".to_string(),
            created_at: now,
            expires_at: now,
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
