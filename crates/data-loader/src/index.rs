//! Building a MovieCatalog from its sources.
//!
//! Three ways in:
//! - the bundled dataset compiled into the binary
//! - a JSON dataset file on disk
//! - records built in code (mostly tests)
//!
//! All of them run the same per-record validation.

use crate::error::Result;
use crate::parser;
use crate::types::{Movie, MovieCatalog};
use std::path::Path;
use tracing::info;

/// Dataset shipped with the crate
const BUILTIN_DATASET: &str = include_str!("../data/movies.json");

impl MovieCatalog {
    /// Load the bundled dataset
    pub fn builtin() -> Result<Self> {
        let movies = parser::parse_movies(BUILTIN_DATASET, "builtin dataset")?;
        info!("Loaded {} movies from builtin dataset", movies.len());
        Ok(Self { movies })
    }

    /// Load a catalog from a JSON dataset file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let movies = parser::parse_movies_file(path)?;
        info!("Loaded {} movies from {}", movies.len(), path.display());
        Ok(Self { movies })
    }

    /// Build a catalog from records, keeping their order
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        for (index, movie) in movies.iter().enumerate() {
            parser::validate_movie(index, movie)?;
        }
        Ok(Self { movies })
    }

    /// Load from `path` when given, otherwise fall back to the bundled dataset
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::builtin(),
        }
    }
}
