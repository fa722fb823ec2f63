//! Shared application state injected into every Axum handler.

use crate::config::AppConfig;
use crate::services::{AirtableClient, CloudinaryClient, TmdbClient};

/// Cheaply cloneable bundle of the three upstream clients.
///
/// The gateway keeps no state of its own: every request gets a clone of the
/// clients and runs an independent chain of at most two outbound calls.
#[derive(Clone)]
pub struct AppState {
    pub airtable: AirtableClient,
    pub cloudinary: CloudinaryClient,
    pub tmdb: TmdbClient,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Build all upstream clients from configuration, sharing one
    /// `reqwest::Client` connection pool between them.
    pub fn from_config(cfg: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        Self {
            airtable: AirtableClient::new(http.clone(), cfg),
            cloudinary: CloudinaryClient::new(http.clone(), cfg),
            tmdb: TmdbClient::new(http, cfg),
            max_upload_bytes: cfg.max_upload_bytes,
        }
    }
}
