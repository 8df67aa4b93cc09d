//! Configuration Module
//!
//! Handles loading the explorer configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default catalog API root.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root URL of the catalog API, without trailing slash
    pub api_base_url: String,
    /// Response cache TTL in seconds (also the reaper period)
    pub cache_ttl: u64,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
    /// Number of location areas per `map` page
    pub page_size: u32,
    /// Pause between catch animation frames in milliseconds
    pub shake_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - Catalog API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 600)
    /// - `POKEDEX_REQUEST_TIMEOUT` - Request timeout in seconds (default: 5)
    /// - `POKEDEX_PAGE_SIZE` - Locations per page (default: 20)
    /// - `POKEDEX_SHAKE_DELAY_MS` - Catch animation delay (default: 800)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: env::var("POKEDEX_API_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            request_timeout: env::var("POKEDEX_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.request_timeout),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(defaults.page_size),
            shake_delay_ms: env::var("POKEDEX_SHAKE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.shake_delay_ms),
        }
    }

    /// Returns a default configuration pointed at another API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Catch animation delay as a Duration.
    pub fn shake_delay(&self) -> Duration {
        Duration::from_millis(self.shake_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            cache_ttl: 600,
            request_timeout: 5,
            page_size: 20,
            shake_delay_ms: 800,
        }
    }
}
