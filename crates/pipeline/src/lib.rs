//! Query engine for the movie catalog.
//!
//! This crate provides:
//! - `MovieQuery`, the validated form of the `genre`/`rating` parameters
//! - Filter trait and implementations
//! - FilterPipeline for composing filters
//! - QueryEngine, which filters a copy of the catalog and sorts it
//!
//! ## Architecture
//! A query is processed in stages:
//! 1. Raw parameters are validated into a `MovieQuery`
//! 2. Filters drop movies that do not match (genre, rating threshold)
//! 3. The survivors are sorted by rating, highest first
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{MovieQuery, QueryEngine};
//!
//! let engine = QueryEngine::new(catalog.clone());
//! let query = MovieQuery::from_params(Some("comedy"), Some("8"))?;
//! let movies = engine.run(&query);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod engine;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::{MovieQuery, QueryError, MAX_RATING_THRESHOLD, MIN_RATING_THRESHOLD};
pub use engine::{sort_by_rating_desc, QueryEngine};
