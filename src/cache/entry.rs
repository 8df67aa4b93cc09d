//! Cache Entry Module
//!
//! Defines a single memoized response: the raw payload and when it was stored.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with its insertion time.
///
/// Entries are never mutated. Overwriting a key replaces the whole entry,
/// which also resets its age.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload (opaque, never decoded by the cache)
    pub value: Bytes,
    /// Insertion instant (monotonic clock)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion instant.
    pub fn with_created_at(value: Bytes, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long ago the entry was stored, measured at `now`.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now` for the given TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired, so
    /// it is visible only while `now - created_at < ttl`.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) >= ttl
    }

    /// Checks whether the entry is stale right now.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.is_expired_at(ttl, Instant::now())
    }
}
