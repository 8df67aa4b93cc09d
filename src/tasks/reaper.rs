//! Cache Reaper Task
//!
//! Background task that periodically sweeps expired entries out of a
//! response cache store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest period the reaper will sleep between sweeps.
///
/// A zero TTL would otherwise turn the loop into a busy spin.
pub const MIN_REAP_INTERVAL: Duration = Duration::from_millis(10);

/// Spawns a task that sweeps `store` once per `period`.
///
/// The task alternates between waiting (sleeping, no lock held) and
/// sweeping (holding the write lock while expired entries are removed).
/// It never finishes on its own; abort the returned handle to stop it.
///
/// # Arguments
/// * `store` - Arc<RwLock<CacheStore>> shared with the owning cache
/// * `period` - Time between sweeps, normally the cache TTL
///
/// # Panics
/// Must be called from within a tokio runtime.
pub fn spawn_reaper_task(store: Arc<RwLock<CacheStore>>, period: Duration) -> JoinHandle<()> {
    let interval = period.max(MIN_REAP_INTERVAL);

    tokio::spawn(async move {
        debug!("Starting cache reaper with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut guard = store.write().await;
                let removed = guard.reap();
                (removed, guard.len())
            };

            if removed > 0 {
                info!(
                    "Cache reap: removed {} expired entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Cache reap: no expired entries found");
            }
        }
    })
}
