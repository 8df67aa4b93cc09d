//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: sweeps expired entries out of a response cache every TTL

mod reaper;

pub use reaper::{spawn_reaper_task, MIN_REAP_INTERVAL};
