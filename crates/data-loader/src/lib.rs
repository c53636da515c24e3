//! # Data Loader Crate
//!
//! Loads the movie catalog served by the movie browser.
//!
//! ## Main Components
//!
//! - **types**: `Movie` records and the read-only `MovieCatalog`
//! - **parser**: Parse JSON dataset files into records
//! - **index**: Build a catalog from the bundled dataset, a file, or records
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(MovieCatalog::builtin()?);
//! println!("{} movies in {} genres", catalog.len(), catalog.genres().len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{DataLoadError, Result};
pub use types::{Movie, MovieCatalog};
