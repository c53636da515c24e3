//! # Query Engine
//!
//! Answers catalog queries:
//! 1. Copy the catalog (the shared catalog is never touched)
//! 2. Run the filter pipeline
//! 3. Sort by rating, highest first

use std::sync::Arc;

use data_loader::{Movie, MovieCatalog};
use tracing::debug;

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{GenreFilter, RatingCeilingFilter};
use crate::query::MovieQuery;

/// Runs queries against a shared, read-only catalog.
///
/// Cloning is cheap; clones share the catalog and the pipeline.
#[derive(Clone)]
pub struct QueryEngine {
    catalog: Arc<MovieCatalog>,
    filter_pipeline: Arc<FilterPipeline>,
}

impl QueryEngine {
    /// Create an engine with the standard genre + rating pipeline
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        let filter_pipeline = FilterPipeline::new()
            .add_filter(GenreFilter)
            .add_filter(RatingCeilingFilter);
        Self::with_pipeline(catalog, filter_pipeline)
    }

    /// Create an engine with a custom pipeline
    pub fn with_pipeline(catalog: Arc<MovieCatalog>, filter_pipeline: FilterPipeline) -> Self {
        Self {
            catalog,
            filter_pipeline: Arc::new(filter_pipeline),
        }
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// Run a query.
    ///
    /// An empty result is a valid answer, not an error.
    pub fn run(&self, query: &MovieQuery) -> Vec<Movie> {
        let movies = self.catalog.movies().to_vec();
        let mut filtered = self.filter_pipeline.apply(movies, query);
        sort_by_rating_desc(&mut filtered);

        debug!(
            genre = ?query.genre,
            rating_below = ?query.rating_below,
            "Query matched {} of {} movies",
            filtered.len(),
            self.catalog.len()
        );
        filtered
    }
}

/// Sort by rating, highest first.
///
/// The sort is stable: equal ratings keep their catalog order.
pub fn sort_by_rating_desc(movies: &mut [Movie]) {
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
}
