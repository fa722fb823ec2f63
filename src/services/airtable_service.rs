//! Record-storage client for the Airtable table that holds user-submitted
//! movie entries.
//!
//! Two operations: list the table (newest first) and insert one row. Both
//! return the upstream JSON body verbatim; ids and creation times are
//! assigned by Airtable, never here.

use super::{RelayError, RelayResult, relay_json};
use crate::config::AppConfig;
use crate::models::movie::{MovieFields, RecordPayload};
use serde_json::Value;
use tracing::debug;

const SERVICE: &str = "Airtable";

/// Bearer-token-authenticated client for one fixed table resource.
#[derive(Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    base_url: String,
    table: String,
    token: String,
}

impl AirtableClient {
    pub fn new(http: reqwest::Client, cfg: &AppConfig) -> Self {
        Self {
            http,
            base_url: cfg.airtable_base_url.trim_end_matches('/').to_string(),
            table: cfg.airtable_table.clone(),
            token: cfg.airtable_token.clone(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/{}", self.base_url, self.table)
    }

    /// List all stored movies in descending creation-time order.
    ///
    /// The `{records: [...]}` body is returned verbatim; ordering is the
    /// storage service's and is never re-sorted locally.
    pub async fn list_movies(&self) -> RelayResult<Value> {
        debug!("listing movie records");

        let response = self
            .http
            .get(self.table_url())
            .query(&[
                ("sort[0][field]", "createdTime"),
                ("sort[0][direction]", "desc"),
            ])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                service: SERVICE,
                source,
            })?;

        relay_json(SERVICE, response).await
    }

    /// Insert one movie row.
    ///
    /// Returns the created record exactly as the storage service describes
    /// it (`{id, fields, createdTime}`).
    pub async fn create_movie(&self, fields: &MovieFields) -> RelayResult<Value> {
        debug!(movie_name = %fields.movie_name, "inserting movie record");

        let response = self
            .http
            .post(self.table_url())
            .bearer_auth(&self.token)
            .json(&RecordPayload { fields })
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                service: SERVICE,
                source,
            })?;

        relay_json(SERVICE, response).await
    }

    /// Cheap readiness probe: ask the table for a single record.
    pub async fn ping(&self) -> RelayResult<()> {
        let response = self
            .http
            .get(self.table_url())
            .query(&[("maxRecords", "1")])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                service: SERVICE,
                source,
            })?;

        relay_json(SERVICE, response).await.map(|_| ())
    }
}
