//! User-submitted movie entries and the request shapes that create them.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The structured fields of a stored movie entry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MovieFields {
    /// Display name, required and non-empty.
    pub movie_name: String,

    /// Absolute URL of the poster image, either submitted directly or
    /// produced by the upload relay.
    pub poster_url: String,
}

/// A movie entry as the record-storage service returns it.
///
/// `id` and `createdTime` are assigned by the storage service, never
/// generated locally. Records are created once and never mutated or deleted
/// by this system.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MovieRecord {
    pub id: String,
    pub fields: MovieFields,
    #[serde(rename = "createdTime")]
    pub created_time: String,
}

/// Envelope for a record insert, shaped the way Airtable expects it.
#[derive(Serialize, Debug)]
pub struct RecordPayload<'a> {
    pub fields: &'a MovieFields,
}

/// Raw JSON body accepted by `POST /api/movies`.
///
/// Fields are optional so presence can be checked explicitly before anything
/// leaves the process.
#[derive(Deserialize, Debug)]
pub struct CreateMovieJson {
    pub movie_name: Option<String>,
    pub poster_url: Option<String>,
}

/// A validated create request, discriminated by how the poster arrives.
///
/// The two inbound shapes (JSON with a ready-made URL, multipart with a raw
/// image) are normalized into this union at the boundary and handled
/// exhaustively from there.
#[derive(Debug)]
pub enum NewMovie {
    /// JSON body carrying a ready-made poster URL.
    DirectUrl { name: String, poster_url: String },

    /// Multipart body carrying the raw poster image, to be relayed to the
    /// image host before the record insert.
    PosterUpload {
        name: String,
        filename: String,
        image: Bytes,
    },
}

impl NewMovie {
    /// Validate a JSON create body. Both fields must be present and
    /// non-empty after trimming.
    pub fn from_json(body: CreateMovieJson) -> Result<Self, &'static str> {
        let name = body.movie_name.as_deref().map(str::trim).unwrap_or_default();
        let poster_url = body.poster_url.as_deref().map(str::trim).unwrap_or_default();

        if name.is_empty() || poster_url.is_empty() {
            return Err("movie_name and poster_url are required");
        }

        Ok(NewMovie::DirectUrl {
            name: name.to_string(),
            poster_url: poster_url.to_string(),
        })
    }

    /// Validate the pieces collected from a multipart form. The name must be
    /// non-empty after trimming and the poster must carry actual bytes.
    pub fn from_upload(
        name: Option<String>,
        filename: Option<String>,
        image: Option<Bytes>,
    ) -> Result<Self, &'static str> {
        let name = name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err("movie_name is required");
        }

        let image = image
            .filter(|bytes| !bytes.is_empty())
            .ok_or("a poster image is required")?;

        Ok(NewMovie::PosterUpload {
            name: name.to_string(),
            filename: filename.unwrap_or_else(|| "poster".to_string()),
            image,
        })
    }
}
