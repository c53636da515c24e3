//! Filter for the rating threshold.
//!
//! The threshold is an exclusive upper bound: `rating=8` keeps movies
//! rated below 8 and drops everything rated 8 or higher.

use crate::query::MovieQuery;
use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies with `rating < query.rating_below`.
pub struct RatingCeilingFilter;

impl Filter for RatingCeilingFilter {
    fn name(&self) -> &str {
        "RatingCeilingFilter"
    }

    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Vec<Movie> {
        let Some(threshold) = query.rating_below else {
            return movies;
        };

        movies
            .into_iter()
            .filter(|movie| movie.rating < threshold)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: f64) -> Movie {
        Movie {
            title: title.to_string(),
            genre: "Drama".to_string(),
            release_date: 0,
            director: "Someone".to_string(),
            rating,
        }
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let movies = vec![movie("A", 9.0), movie("B", 3.0), movie("C", 7.0), movie("D", 8.0)];
        let query = MovieQuery::new().with_rating_below(8.0).unwrap();

        let filtered = RatingCeilingFilter.apply(movies, &query);
        let titles: Vec<_> = filtered.iter().map(|m| m.title.as_str()).collect();

        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn test_no_threshold_keeps_everything() {
        let movies = vec![movie("A", 10.0), movie("B", 0.0)];
        let filtered = RatingCeilingFilter.apply(movies, &MovieQuery::new());
        assert_eq!(filtered.len(), 2);
    }
}
