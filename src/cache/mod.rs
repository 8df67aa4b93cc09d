//! Cache Module
//!
//! Provides the in-memory TTL response cache used by the API client.

mod entry;
mod response_cache;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::ResponseCache;
pub use store::CacheStore;
