//! Client for the external movie catalog (TMDB).
//!
//! Read-only: fetches one curated list per call and relays the
//! `{results: [...]}` body to the browser unmodified.

use super::{RelayError, RelayResult, relay_json};
use crate::config::AppConfig;
use serde_json::Value;
use tracing::debug;

const SERVICE: &str = "TMDB";

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(http: reqwest::Client, cfg: &AppConfig) -> Self {
        Self {
            http,
            base_url: cfg.tmdb_base_url.trim_end_matches('/').to_string(),
            api_key: cfg.tmdb_api_key.clone(),
        }
    }

    /// Fetch one curated list, e.g. `popular` or `upcoming`.
    pub async fn movies(&self, category: &str) -> RelayResult<Value> {
        debug!(category, "fetching catalog list");

        let url = format!("{}/movie/{}", self.base_url, category);
        let response = self
            .http
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                service: SERVICE,
                source,
            })?;

        relay_json(SERVICE, response).await
    }
}
