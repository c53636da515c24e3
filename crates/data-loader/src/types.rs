//! Core domain types for the movie catalog.
//!
//! The catalog is reference data: it is built once at startup and only
//! ever read afterwards. Nothing in this crate hands out a mutable view
//! of a loaded catalog.

use serde::{Deserialize, Serialize};

// =============================================================================
// Movie
// =============================================================================

/// A single movie record.
///
/// The serialized form is the wire format of `GET /api/movies`, so field
/// names must stay as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Free-form genre label, compared case-insensitively by queries
    pub genre: String,
    /// Release date as Unix epoch seconds
    pub release_date: i64,
    pub director: String,
    /// Conventionally 0-10, not enforced
    pub rating: f64,
}

impl Movie {
    /// Case-insensitive genre comparison used by the query engine
    pub fn genre_matches(&self, genre: &str) -> bool {
        self.genre.to_lowercase() == genre.to_lowercase()
    }
}

// =============================================================================
// MovieCatalog - the in-memory collection
// =============================================================================

/// Fixed, read-only collection of movies.
///
/// Records keep the order they were loaded in. Share it across tasks
/// behind an `Arc<MovieCatalog>`.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    pub(crate) movies: Vec<Movie>,
}

impl MovieCatalog {
    /// All movies in load order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Distinct genres, sorted case-insensitively.
    ///
    /// Genres that differ only by case collapse to the first spelling seen.
    pub fn genres(&self) -> Vec<String> {
        let mut seen: Vec<(String, String)> = Vec::new();
        for movie in &self.movies {
            let key = movie.genre.to_lowercase();
            if !seen.iter().any(|(k, _)| *k == key) {
                seen.push((key, movie.genre.clone()));
            }
        }
        seen.sort_by(|a, b| a.0.cmp(&b.0));
        seen.into_iter().map(|(_, genre)| genre).collect()
    }
}
