//! Upload relay for the image-hosting service.
//!
//! Takes one raw poster image, forwards it to Cloudinary's unsigned upload
//! endpoint as multipart form data, and hands back the resulting public URL.
//! No retries: a failed upload is relayed to the caller as-is, and an upload
//! whose record insert later fails is simply orphaned.

use super::{RelayError, RelayResult, relay_json};
use crate::config::AppConfig;
use bytes::Bytes;
use reqwest::multipart;
use serde_json::Value;
use tracing::debug;

const SERVICE: &str = "Cloudinary";

#[derive(Clone)]
pub struct CloudinaryClient {
    http: reqwest::Client,
    base_url: String,
    cloud_name: String,
    upload_preset: String,
}

impl CloudinaryClient {
    pub fn new(http: reqwest::Client, cfg: &AppConfig) -> Self {
        Self {
            http,
            base_url: cfg.cloudinary_base_url.trim_end_matches('/').to_string(),
            cloud_name: cfg.cloudinary_name.clone(),
            upload_preset: cfg.cloudinary_upload_preset.clone(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.base_url, self.cloud_name)
    }

    /// Upload one poster image and return its public URL.
    ///
    /// A successful upload response must carry a `secure_url` field; a
    /// success status without one is a hard failure, not something to
    /// recover from.
    pub async fn upload_poster(&self, filename: &str, image: Bytes) -> RelayResult<String> {
        debug!(filename, size_bytes = image.len(), "uploading poster image");

        let part = multipart::Part::stream(image).file_name(filename.to_string());
        let form = multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone());

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|source| RelayError::Transport {
                service: SERVICE,
                source,
            })?;

        let body = relay_json(SERVICE, response).await?;
        match secure_url(&body) {
            Some(url) => Ok(url.to_string()),
            None => Err(RelayError::MalformedResponse {
                service: SERVICE,
                field: "secure_url",
            }),
        }
    }
}

/// Extract the public URL from an upload response body.
fn secure_url(body: &Value) -> Option<&str> {
    body.get("secure_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn secure_url_is_extracted() {
        let body = json!({ "secure_url": "https://img/x.png", "public_id": "x" });
        assert_eq!(secure_url(&body), Some("https://img/x.png"));
    }

    #[test]
    fn missing_or_empty_secure_url_is_rejected() {
        assert_eq!(secure_url(&json!({ "public_id": "x" })), None);
        assert_eq!(secure_url(&json!({ "secure_url": "" })), None);
        assert_eq!(secure_url(&json!({ "secure_url": 42 })), None);
    }
}
