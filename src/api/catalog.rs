//! Catalog Endpoints
//!
//! Typed wrappers over [`Client::fetch_json`] for the resources the
//! explorer uses.

use crate::api::Client;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

impl Client {
    /// URL of the first page of location areas.
    pub fn first_location_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url(),
            self.page_size()
        )
    }

    /// Fetches one page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn list_location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_location_page_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches the details of one location area by name.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        if name.is_empty() {
            return Err(PokedexError::Usage("explore <area_name>".to_string()));
        }

        let url = format!("{}/location-area/{}", self.base_url(), name);
        self.fetch_json(&url).await.map_err(|err| match err {
            PokedexError::NotFound(_) => PokedexError::NotFound(format!("location area '{}'", name)),
            other => other,
        })
    }

    /// Fetches a Pokémon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        if name.is_empty() {
            return Err(PokedexError::Usage("catch <pokemon_name>".to_string()));
        }

        let url = format!("{}/pokemon/{}", self.base_url(), name);
        self.fetch_json(&url).await.map_err(|err| match err {
            PokedexError::NotFound(_) => PokedexError::NotFound(format!("pokemon '{}'", name)),
            other => other,
        })
    }
}
