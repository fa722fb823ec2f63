//! HTTP handlers for listing and creating movie entries.
//!
//! Create accepts two request shapes — JSON carrying a ready-made poster URL,
//! or multipart form data carrying a raw image — and normalizes both into
//! [`NewMovie`] before anything leaves the process. Validation failures are
//! reported without making a single outbound call.

use crate::{
    errors::AppError,
    models::movie::{CreateMovieJson, MovieFields, NewMovie},
    state::AppState,
};
use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, State},
    http::{StatusCode, header},
};
use serde_json::Value;
use tracing::info;

/// `GET /api/movies` — relay the stored entries, newest first.
///
/// The storage service's response body is returned verbatim, in the order it
/// chose.
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let records = state.airtable.list_movies().await?;
    Ok(Json(records))
}

/// `POST /api/movies` — create one entry.
///
/// Dispatches on `Content-Type`: `application/json` bodies carry a poster URL
/// directly, `multipart/form-data` bodies carry the image itself and go
/// through the upload relay first. Anything else is a 400.
///
/// If the image upload succeeds but the record insert fails, the insert
/// failure is what gets reported; the uploaded image is orphaned.
pub async fn create_movie(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Value>, AppError> {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let new_movie = if content_type.starts_with("application/json") {
        let Json(body) = Json::<CreateMovieJson>::from_request(request, &())
            .await
            .map_err(|err| AppError::bad_request(format!("invalid JSON body: {err}")))?;
        NewMovie::from_json(body).map_err(AppError::bad_request)?
    } else if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|err| AppError::bad_request(format!("invalid multipart body: {err}")))?;
        read_poster_form(multipart, state.max_upload_bytes).await?
    } else {
        return Err(AppError::bad_request(
            "expected application/json or multipart/form-data",
        ));
    };

    let fields = match new_movie {
        NewMovie::DirectUrl { name, poster_url } => MovieFields {
            movie_name: name,
            poster_url,
        },
        NewMovie::PosterUpload {
            name,
            filename,
            image,
        } => {
            let poster_url = state.cloudinary.upload_poster(&filename, image).await?;
            MovieFields {
                movie_name: name,
                poster_url,
            }
        }
    };

    let record = state.airtable.create_movie(&fields).await?;
    info!(movie_name = %fields.movie_name, "movie entry created");
    Ok(Json(record))
}

/// Pull `movie_name` and `poster` out of a multipart form.
///
/// Unknown fields are rejected rather than skipped so a misspelled field
/// name fails loudly instead of producing a record with missing data.
async fn read_poster_form(
    mut multipart: Multipart,
    max_upload_bytes: usize,
) -> Result<NewMovie, AppError> {
    let mut name = None;
    let mut filename = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(format!("failed to read multipart field: {err}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "movie_name" => {
                let text = field
                    .text()
                    .await
                    .map_err(|err| AppError::bad_request(format!("failed to read movie_name: {err}")))?;
                name = Some(text);
            }
            "poster" => {
                filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::bad_request(format!("failed to read poster: {err}")))?;
                if bytes.len() > max_upload_bytes {
                    return Err(AppError::new(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        format!(
                            "poster is {} bytes, the limit is {} bytes",
                            bytes.len(),
                            max_upload_bytes
                        ),
                    ));
                }
                image = Some(bytes);
            }
            other => {
                return Err(AppError::bad_request(format!(
                    "unknown multipart field `{other}`"
                )));
            }
        }
    }

    NewMovie::from_upload(name, filename, image).map_err(AppError::bad_request)
}
