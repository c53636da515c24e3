//! Core traits for the filtering pipeline.

use crate::query::MovieQuery;
use data_loader::Movie;

/// A single filtering stage.
///
/// Filters read their parameters from the `MovieQuery` they are applied
/// with, so one pipeline serves every request.
///
/// `Send + Sync` lets a pipeline be shared between request handlers.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// Takes ownership of the input and returns the movies that pass.
    /// A filter whose parameter is absent from `query` passes everything.
    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Vec<Movie>;
}
