//! Validated query parameters.
//!
//! Requests carry `genre` and `rating` as raw strings. `MovieQuery`
//! holds them after validation so the filters never see bad input.

use thiserror::Error;

/// Smallest accepted rating threshold (inclusive)
pub const MIN_RATING_THRESHOLD: f64 = 1.0;

/// Largest accepted rating threshold (inclusive)
pub const MAX_RATING_THRESHOLD: f64 = 10.0;

/// Errors raised while validating query parameters.
///
/// The message is part of the HTTP contract and is returned verbatim in
/// 400 responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Rating must be a number between 1 and 10")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
    },
}

/// Filters to apply to the catalog.
///
/// `None` means the filter is not applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieQuery {
    /// Keep only this genre, compared case-insensitively
    pub genre: Option<String>,
    /// Keep only movies rated strictly below this threshold
    pub rating_below: Option<f64>,
}

impl MovieQuery {
    /// Query that returns the whole catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw request parameters.
    ///
    /// Empty strings count as absent. The rating is trimmed, must parse
    /// as a finite number and must lie in `[1, 10]`.
    pub fn from_params(genre: Option<&str>, rating: Option<&str>) -> Result<Self, QueryError> {
        let mut query = Self::new();

        if let Some(raw) = rating.filter(|r| !r.is_empty()) {
            let threshold = parse_rating_threshold(raw)?;
            query = query.with_rating_below(threshold)?;
        }

        if let Some(genre) = genre {
            query = query.with_genre(genre);
        }

        Ok(query)
    }

    /// Restrict to one genre. An empty genre clears the filter.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        let genre = genre.into();
        self.genre = if genre.is_empty() { None } else { Some(genre) };
        self
    }

    /// Keep only movies rated below `threshold`
    pub fn with_rating_below(mut self, threshold: f64) -> Result<Self, QueryError> {
        if !(MIN_RATING_THRESHOLD..=MAX_RATING_THRESHOLD).contains(&threshold) {
            return Err(QueryError::InvalidParameter {
                parameter: "rating",
                value: threshold.to_string(),
            });
        }
        self.rating_below = Some(threshold);
        Ok(self)
    }

    /// True when no filter is set
    pub fn is_unfiltered(&self) -> bool {
        self.genre.is_none() && self.rating_below.is_none()
    }
}

fn parse_rating_threshold(raw: &str) -> Result<f64, QueryError> {
    let invalid = || QueryError::InvalidParameter {
        parameter: "rating",
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    // "inf" and "NaN" parse successfully
    if !value.is_finite() || !(MIN_RATING_THRESHOLD..=MAX_RATING_THRESHOLD).contains(&value) {
        return Err(invalid());
    }
    Ok(value)
}
