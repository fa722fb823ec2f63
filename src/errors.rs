use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::services::RelayError;

/// A lightweight wrapper for general errors that keeps the message local.
///
/// `details` carries raw upstream error text when an external service failed,
/// so the browser sees both a stable message and the original diagnostics.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
            details: None,
        }
    }

    /// Shortcut for a 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Attach raw upstream error text to the response body.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = json!({ "error": self.message });
        if let Some(details) = self.details {
            body["details"] = json!(details);
        }

        (self.status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::internal(err.to_string())
    }
}

/// Map upstream failures to the HTTP boundary without reinterpretation:
/// an upstream status is relayed unchanged with its raw body attached,
/// everything else is a 502 on the gateway's own account.
impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::UpstreamStatus {
                service,
                status,
                body,
            } => AppError::new(status, format!("{service} request failed")).with_details(body),
            RelayError::MalformedResponse { service, field } => AppError::new(
                StatusCode::BAD_GATEWAY,
                format!("{service} response is missing `{field}`"),
            ),
            RelayError::Transport { service, source } => {
                AppError::new(StatusCode::BAD_GATEWAY, format!("request to {service} failed"))
                    .with_details(source.to_string())
            }
        }
    }
}
