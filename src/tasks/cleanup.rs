//! Expired Entry Sweep
//!
//! Lookups already ignore expired entries; this task frees the memory held
//! by listings nobody asks for again.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::cache::MemoryCache;

/// Spawns a background task that sweeps expired entries from `cache` every
/// `interval_secs` seconds.
///
/// Returns the task handle so shutdown can abort it.
pub fn spawn_cleanup_task(cache: MemoryCache, interval_secs: u64) -> JoinHandle<()> {
    let period = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting cache sweep every {} seconds", period.as_secs());

        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        let store = cache.store();
        loop {
            ticker.tick().await;

            let (removed, stats) = {
                let mut guard = store.write().await;
                (guard.cleanup_expired(), guard.stats())
            };

            if removed > 0 {
                info!(
                    removed,
                    remaining = stats.total_entries,
                    "Cache sweep removed expired entries"
                );
            } else {
                debug!(
                    remaining = stats.total_entries,
                    hit_rate = stats.hit_rate(),
                    "Cache sweep found nothing to remove"
                );
            }
        }
    })
}
