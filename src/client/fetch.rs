//! Read-through fetching
//!
//! Every request URL doubles as its cache key. Only successful response
//! bodies are stored; failures are returned without touching the cache.

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, PokemonDetail};

/// PokeAPI client backed by an [`ExpiringCache`] of raw response bodies.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: ExpiringCache,
}

impl PokeApiClient {
    /// Builds a client for `config.base_url` with the configured timeout.
    pub fn new(config: &Config, cache: ExpiringCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache,
        })
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// URL of the first page of location areas.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the body at `url`, from the cache when possible.
    ///
    /// On a miss the URL is requested; a successful body is cached under the
    /// URL before being returned. 404s, other non-success statuses and
    /// transport errors are never cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            return Ok(body);
        }

        debug!("Fetching {}", url);
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(resource_name(url).to_string()));
        }
        if !status.is_success() {
            warn!("Request to {} failed with status {}", url, status);
            return Err(PokedexError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.set(url, body.clone());
        Ok(body)
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        serde_json::from_slice(&body).map_err(|source| PokedexError::Decode {
            url: url.to_string(),
            source,
        })
    }

    // == Typed Endpoints ==
    /// Fetches a page of location areas; `None` means the first page.
    pub async fn location_area_page(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.location_areas_url()).await,
        }
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<PokemonDetail> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}

/// Last non-empty path segment of `url`, used to name missing resources.
fn resource_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(url)
}
