//! HTTP handler for the curated catalog passthrough.

use crate::{errors::AppError, models::catalog, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

/// `GET /api/catalog/{category}` — relay one curated list from the catalog
/// service, e.g. `popular` or `top_rated`.
///
/// The category is checked against the fixed set the UI uses before any
/// outbound call is made; the `{results: [...]}` body comes back verbatim.
pub async fn list_catalog(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !catalog::is_supported_category(&category) {
        return Err(AppError::bad_request(format!(
            "unknown catalog category `{category}`"
        )));
    }

    let movies = state.tmdb.movies(&category).await?;
    Ok(Json(movies))
}
