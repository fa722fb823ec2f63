//! Defines routes for the browser-facing gateway API.
//!
//! ## Structure
//! - **Movie entries**
//!   - `GET  /api/movies` — list stored entries, newest first
//!   - `POST /api/movies` — create an entry (JSON with a poster URL, or
//!     multipart with a raw image)
//!
//! - **Catalog passthrough**
//!   - `GET /api/catalog/{category}` — relay one curated list
//!
//! All failure responses share the `{error, details}` JSON shape.

use crate::{
    handlers::{
        catalog_handlers::list_catalog,
        health_handlers::{healthz, readyz},
        movie_handlers::{create_movie, list_movies},
    },
    state::AppState,
};
use axum::{Router, extract::DefaultBodyLimit, routing::get};

/// Build and return the router for the whole gateway surface.
///
/// The router carries shared state ([`AppState`]) to all handlers. The body
/// limit is raised from axum's default so poster uploads up to the configured
/// cap reach the multipart reader; the small slack on top covers the
/// multipart envelope around the image itself.
pub fn routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // movie entries
        .route("/api/movies", get(list_movies).post(create_movie))
        // catalog passthrough
        .route("/api/catalog/{category}", get(list_catalog))
        .layer(DefaultBodyLimit::max(max_upload_bytes + 16 * 1024))
}
