//! Cache Sweep Task
//!
//! Background task that periodically removes expired response-cache entries.
//! Correctness never depends on it: expiry is enforced at lookup time, the
//! sweep just keeps dead entries from accumulating between reads.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task sleeps for the given interval between runs and takes the write
/// lock only for the duration of the sweep.
///
/// # Returns
/// A JoinHandle used to abort the task during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ResponseCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.sweep_expired();
                (removed, cache_guard.stats())
            };

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
            debug!(
                "Cache stats: {} hits, {} misses, {:.0}% hit rate, {} live entries",
                stats.hits,
                stats.misses,
                stats.hit_rate() * 100.0,
                stats.total_entries
            );
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.put("products?page=1", json!({"total": 0}), 0);
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let cache_guard = cache.read().await;
            assert!(cache_guard.is_empty(), "Expired entry should be swept");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_live_entries() {
        let cache = Arc::new(RwLock::new(ResponseCache::new()));

        {
            let mut cache_guard = cache.write().await;
            cache_guard.put("products?page=1", json!({"total": 3}), 60_000);
        }

        let handle = spawn_cleanup_task(cache.clone(), 1);

        tokio::time::sleep(Duration::from_millis(1500)).await;

        {
            let mut cache_guard = cache.write().await;
            assert!(cache_guard.get("products?page=1").is_some());
        }

        handle.abort();
    }

    #[tokio::test]
    async fn test_sweep_task_can_be_aborted() {
        let cache = Arc::new(RwLock::new(ResponseCache::new()));

        let handle = spawn_cleanup_task(cache, 1);
        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
