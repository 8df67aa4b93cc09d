//! Error types for the explorer
//!
//! Provides unified error handling using thiserror. The response cache has
//! no failure modes of its own; everything here comes from fetching,
//! decoding, or the terminal.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the explorer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport failure (connect, timeout, body read)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Unexpected status code {status} for {url}")]
    Status { status: u16, url: String },

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The payload could not be decoded
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked with missing or invalid arguments
    #[error("usage: {0}")]
    Usage(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
