//! Pokédex CLI - A command-line explorer for the Pokémon catalog API
//!
//! Remote responses are memoized by a per-client TTL cache with a
//! background reaper, so paging back and forth stays off the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::Client;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
