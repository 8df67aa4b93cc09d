//! Response Cache Module
//!
//! Owned, concurrency-safe handle around a [`CacheStore`] plus the reaper
//! task that keeps it trimmed.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::CacheStore;
use crate::tasks::spawn_reaper_task;

// == Response Cache ==
/// TTL memoizer for raw remote responses.
///
/// One instance belongs to one API client. It is deliberately not `Clone`:
/// sharing goes through the owner, so independent clients never see each
/// other's entries. Dropping the cache stops its reaper.
#[derive(Debug)]
pub struct ResponseCache {
    /// Store guarded by a single reader/writer lock
    store: Arc<RwLock<CacheStore>>,
    /// Handle of the background sweep
    reaper: JoinHandle<()>,
    /// Expiration window, fixed at construction
    ttl: Duration,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper, which sweeps every `ttl`.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let reaper = spawn_reaper_task(store.clone(), ttl);
        debug!("Response cache created with ttl {:?}", ttl);

        Self { store, reaper, ttl }
    }

    // == Get ==
    /// Returns the cached payload for `key`, or `None` if it is absent or
    /// older than the TTL.
    pub async fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.store.read().await.get(key);
        debug!(key, hit = value.is_some(), "Cache lookup");
        value
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let key = key.into();
        debug!(key = %key, "Cache add");
        self.store.write().await.add(key, value.into());
    }

    // == Stop ==
    /// Stops the background reaper. Safe to call more than once.
    ///
    /// The cache stays usable afterwards; expired entries are still hidden
    /// by `get`, they just are no longer reclaimed.
    pub fn stop(&self) {
        if !self.reaper.is_finished() {
            debug!("Stopping cache reaper");
        }
        self.reaper.abort();
    }

    // == Is Reaping ==
    /// Returns true while the reaper task is alive.
    pub fn is_reaping(&self) -> bool {
        !self.reaper.is_finished()
    }

    // == TTL ==
    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of stored entries, including stale ones not yet reaped.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Drop for ResponseCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
