//! Catalog HTTP Client
//!
//! Wraps a reqwest client with the response cache: every GET is keyed by
//! its fully-resolved URL, and only payloads that decoded successfully are
//! memoized.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};

/// HTTP client for the catalog API.
///
/// Owns its own [`ResponseCache`]; two clients never share cached
/// responses.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    cache: ResponseCache,
    base_url: String,
    page_size: u32,
}

impl Client {
    /// Builds a client from configuration and starts its cache reaper.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            cache: ResponseCache::new(config.cache_ttl()),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// Returns the response cache backing this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured page size for list endpoints.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetches `url` and decodes it as JSON, consulting the cache first.
    ///
    /// # Errors
    /// - `NotFound` on 404
    /// - `Status` on any other non-200 status
    /// - `Http` on transport failures or timeouts
    /// - `Decode` if the body (fresh or cached) is not the expected JSON
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Serving response from cache");
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!(url, "Cache miss, requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "Unexpected status code");
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;

        self.cache.add(url, body).await;
        Ok(decoded)
    }
}
