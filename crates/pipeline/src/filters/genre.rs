//! Filter to keep only movies of the requested genre.

use crate::query::MovieQuery;
use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose genre equals `query.genre`, ignoring case.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Vec<Movie> {
        let Some(genre) = query.genre.as_deref() else {
            return movies;
        };

        movies
            .into_iter()
            .filter(|movie| movie.genre_matches(genre))
            .collect()
    }
}
