//! Filter implementations for the query pipeline.

pub mod genre;
pub mod rating_ceiling;

// Re-export for convenience
pub use genre::GenreFilter;
pub use rating_ceiling::RatingCeilingFilter;
