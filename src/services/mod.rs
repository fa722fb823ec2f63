//! HTTP clients for the three upstream services the gateway fronts.
//!
//! Each client wraps a shared `reqwest::Client` plus the configuration it
//! needs. All of them surface failures as [`RelayError`] so the HTTP boundary
//! can relay upstream status and error text unchanged.

pub mod airtable_service;
pub mod cloudinary_service;
pub mod tmdb_service;

pub use airtable_service::AirtableClient;
pub use cloudinary_service::CloudinaryClient;
pub use tmdb_service::TmdbClient;

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failures from a single outbound call to an upstream service.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream answered with a non-success status. Status and raw body
    /// are kept together so the caller can relay both unchanged.
    #[error("{service} returned {status}")]
    UpstreamStatus {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    /// The upstream answered successfully but the response is missing a
    /// field the contract requires.
    #[error("{service} response is missing `{field}`")]
    MalformedResponse {
        service: &'static str,
        field: &'static str,
    },

    /// The request never completed: connection failure, or a body that
    /// could not be read or parsed.
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

pub type RelayResult<T> = Result<T, RelayError>;

const UNREADABLE_BODY: &str = "upstream error body could not be read";

/// Check the response status and parse the body as JSON, preserving the
/// upstream status and error text on failure.
pub(crate) async fn relay_json(
    service: &'static str,
    response: reqwest::Response,
) -> RelayResult<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| UNREADABLE_BODY.to_string());
        return Err(RelayError::UpstreamStatus {
            service,
            status,
            body,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|source| RelayError::Transport { service, source })
}
