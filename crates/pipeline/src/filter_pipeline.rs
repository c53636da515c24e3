//! The FilterPipeline chains filters together using the builder pattern.

use crate::query::MovieQuery;
use crate::traits::Filter;
use data_loader::Movie;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter)
///     .add_filter(RatingCeilingFilter);
///
/// let filtered = pipeline.apply(movies, &query);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Every filter sees the output of the previous one, so the result
    /// is the AND of all filters.
    pub fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Vec<Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{GenreFilter, RatingCeilingFilter};

    fn movie(title: &str, genre: &str, rating: f64) -> Movie {
        Movie {
            title: title.to_string(),
            genre: genre.to_string(),
            release_date: 0,
            director: "Someone".to_string(),
            rating,
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let query = MovieQuery::new().with_genre("Drama");

        let movies = vec![movie("A", "Action", 9.0), movie("B", "Drama", 8.0)];

        let filtered = pipeline.apply(movies.clone(), &query);
        assert_eq!(filtered, movies);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(GenreFilter);
        let query = MovieQuery::new().with_genre("drama");

        let movies = vec![movie("A", "Action", 9.0), movie("B", "Drama", 8.0)];

        let filtered = pipeline.apply(movies, &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "B");
    }

    #[test]
    fn test_filters_combine_with_and() {
        let pipeline = FilterPipeline::new()
            .add_filter(GenreFilter)
            .add_filter(RatingCeilingFilter);
        let query = MovieQuery::new()
            .with_genre("Comedy")
            .with_rating_below(8.0)
            .unwrap();

        let movies = vec![
            movie("Funny", "Comedy", 7.5),
            movie("Too Good", "Comedy", 8.0),
            movie("Wrong Genre", "Drama", 5.0),
        ];

        let filtered = pipeline.apply(movies, &query);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Funny");
    }
}
