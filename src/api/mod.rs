//! API Module
//!
//! HTTP client for the remote catalog, memoized through the response cache.
//!
//! # Endpoints
//! - `GET /location-area?offset=&limit=` - Page through location areas
//! - `GET /location-area/{name}` - Pokémon encountered in an area
//! - `GET /pokemon/{name}` - Pokémon details

mod catalog;
pub mod client;

pub use client::Client;
