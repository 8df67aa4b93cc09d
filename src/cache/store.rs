//! Cache Store Module
//!
//! The map behind the response cache. It is not synchronized itself; the
//! owning [`ResponseCache`](super::ResponseCache) wraps it in a single
//! `RwLock` and the reaper task sweeps it through the same lock.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key to entry storage with a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage, keyed by resolved request URL
    entries: HashMap<String, CacheEntry>,
    /// Expiration window, also the reaper period
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or replaces the entry for `key`.
    ///
    /// Last write wins and the age of the entry resets.
    pub fn add(&mut self, key: String, value: Bytes) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the payload for `key` if present and not yet expired.
    ///
    /// Takes `&self` so it can run under a shared lock: a stale entry is
    /// hidden here and physically removed by the next sweep.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.get_at(key, Instant::now())
    }

    /// Lookup evaluated at an explicit instant.
    pub fn get_at(&self, key: &str, now: Instant) -> Option<Bytes> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired_at(self.ttl, now))
            .map(|entry| entry.value.clone())
    }

    // == Reap ==
    /// Removes every entry whose age is at least the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap(&mut self) -> usize {
        self.reap_at(Instant::now())
    }

    /// Sweep evaluated at an explicit instant.
    pub fn reap_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired_at(ttl, now));
        before - self.entries.len()
    }

    // == TTL ==
    /// Returns the configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the number of stored entries, including stale ones not yet reaped.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const TTL: Duration = Duration::from_secs(300);

    fn bytes(v: &[u8]) -> Bytes {
        Bytes::copy_from_slice(v)
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new(TTL);

        store.add("u1".to_string(), bytes(&[1, 2, 3]));

        assert_eq!(store.get("u1"), Some(bytes(&[1, 2, 3])));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let store = CacheStore::new(TTL);

        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TTL);

        store.add("u1".to_string(), bytes(&[1]));
        store.add("u1".to_string(), bytes(&[2]));

        assert_eq!(store.get("u1"), Some(bytes(&[2])));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let ttl = Duration::from_millis(100);
        let mut store = CacheStore::new(ttl);

        store.add("u1".to_string(), bytes(&[1]));
        sleep(Duration::from_millis(60));
        store.add("u1".to_string(), bytes(&[2]));
        sleep(Duration::from_millis(60));

        // 120ms since the first add, 60ms since the overwrite
        assert_eq!(store.get("u1"), Some(bytes(&[2])));
    }

    #[test]
    fn test_store_get_hides_expired_before_reap() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("u1".to_string(), bytes(&[1, 2, 3]));
        let later = Instant::now() + Duration::from_millis(150);

        assert_eq!(store.get_at("u1", later), None);
        // Still physically present until a sweep runs
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("u1".to_string(), bytes(&[1, 2, 3]));
        assert!(store.get("u1").is_some());

        sleep(Duration::from_millis(150));

        assert_eq!(store.get("u1"), None);
    }

    #[test]
    fn test_store_reap_removes_only_expired() {
        let mut store = CacheStore::new(Duration::from_millis(100));

        store.add("old".to_string(), bytes(b"old"));
        sleep(Duration::from_millis(120));
        store.add("fresh".to_string(), bytes(b"fresh"));

        let removed = store.reap();

        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("old"), None);
        assert_eq!(store.get("fresh"), Some(bytes(b"fresh")));
    }

    #[test]
    fn test_store_reap_keeps_young_entries() {
        let mut store = CacheStore::new(TTL);

        store.add("a".to_string(), bytes(b"a"));
        store.add("b".to_string(), bytes(b"b"));

        // A sweep right after insertion must not evict anything
        assert_eq!(store.reap(), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_reap_at_boundary() {
        let mut store = CacheStore::new(Duration::from_millis(100));
        store.add("u1".to_string(), bytes(b"x"));

        let removed = store.reap_at(Instant::now() + Duration::from_millis(100));

        assert_eq!(removed, 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_keys_are_exact_urls() {
        let mut store = CacheStore::new(TTL);

        store.add("https://host/area?offset=0".to_string(), bytes(b"page0"));
        store.add("https://host/area?offset=20".to_string(), bytes(b"page1"));

        assert_eq!(store.get("https://host/area?offset=0"), Some(bytes(b"page0")));
        assert_eq!(store.get("https://host/area?offset=20"), Some(bytes(b"page1")));
        assert_eq!(store.get("https://host/area"), None);
    }
}
