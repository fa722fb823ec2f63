//! Read-only catalog entries sourced from the external catalog service.

use serde::{Deserialize, Serialize};

/// A movie as the catalog service describes it.
///
/// Passed through to the browser unmodified and never persisted; the image
/// paths are relative and resolved against the catalog's image CDN by the
/// front end.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CatalogMovie {
    pub id: i64,
    pub title: String,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
}

/// Curated list names the UI requests. Anything else is rejected before an
/// outbound call is made.
pub const CATALOG_CATEGORIES: [&str; 4] = ["popular", "top_rated", "upcoming", "now_playing"];

pub fn is_supported_category(category: &str) -> bool {
    CATALOG_CATEGORIES.iter().any(|known| *known == category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_are_accepted() {
        for category in CATALOG_CATEGORIES {
            assert!(is_supported_category(category));
        }
    }

    #[test]
    fn unknown_categories_are_rejected() {
        assert!(!is_supported_category("scary"));
        assert!(!is_supported_category("POPULAR"));
        assert!(!is_supported_category(""));
    }
}
