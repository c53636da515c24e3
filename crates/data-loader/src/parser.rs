//! Parser for movie dataset files.
//!
//! A dataset is a JSON array of records with the same fields the HTTP
//! API returns:
//!
//! ```json
//! [{ "title": "Die Hard", "genre": "Action", "release_date": 584928000,
//!    "director": "John McTiernan", "rating": 8.2 }]
//! ```

use crate::error::{DataLoadError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a dataset from a JSON string.
///
/// `source_name` only shows up in error messages.
pub fn parse_movies(json: &str, source_name: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> =
        serde_json::from_str(json).map_err(|e| DataLoadError::ParseError {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

    for (index, movie) in movies.iter().enumerate() {
        validate_movie(index, movie)?;
    }

    Ok(movies)
}

/// Read and parse a dataset file
pub fn parse_movies_file(path: &Path) -> Result<Vec<Movie>> {
    let json = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    parse_movies(&json, &path.display().to_string())
}

/// Check one record. `index` is its position in the dataset.
pub(crate) fn validate_movie(index: usize, movie: &Movie) -> Result<()> {
    if movie.title.trim().is_empty() {
        return Err(DataLoadError::InvalidValue {
            index,
            field: "title".to_string(),
            value: movie.title.clone(),
        });
    }
    if movie.genre.trim().is_empty() {
        return Err(DataLoadError::InvalidValue {
            index,
            field: "genre".to_string(),
            value: movie.genre.clone(),
        });
    }
    // serde_json never yields NaN, but catalogs built in code can
    if !movie.rating.is_finite() {
        return Err(DataLoadError::InvalidValue {
            index,
            field: "rating".to_string(),
            value: movie.rating.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movies() {
        let json = r#"[
            {"title": "Die Hard", "genre": "Action", "release_date": 584928000,
             "director": "John McTiernan", "rating": 8.2},
            {"title": "Toy Story", "genre": "Animation", "release_date": 816998400,
             "director": "John Lasseter", "rating": 8}
        ]"#;

        let movies = parse_movies(json, "inline").unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Die Hard");
        assert_eq!(movies[0].release_date, 584928000);
        // Integer ratings are accepted
        assert_eq!(movies[1].rating, 8.0);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_movies(r#"{"title": "Die Hard"}"#, "inline").unwrap_err();
        assert!(matches!(err, DataLoadError::ParseError { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        let json = r#"[{"title": "Die Hard", "genre": "Action", "rating": 8.2}]"#;
        let err = parse_movies(json, "inline").unwrap_err();
        assert!(err.to_string().contains("release_date"));
    }

    #[test]
    fn test_parse_rejects_blank_genre() {
        let json = r#"[
            {"title": "Die Hard", "genre": "Action", "release_date": 0,
             "director": "John McTiernan", "rating": 8.2},
            {"title": "Nameless", "genre": "  ", "release_date": 0,
             "director": "Nobody", "rating": 1.0}
        ]"#;

        match parse_movies(json, "inline").unwrap_err() {
            DataLoadError::InvalidValue { index, field, .. } => {
                assert_eq!(index, 1);
                assert_eq!(field, "genre");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = parse_movies_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}
