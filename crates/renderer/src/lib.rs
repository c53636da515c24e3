//! Renderer for the movie browser.
//!
//! This crate turns a genre/rating selection into something a user can
//! look at. It handles:
//! - Fetching movies, over HTTP or from an in-process query engine
//! - Building the table view (formatted dates, rating bands)
//! - Falling back to the empty or error state instead of failing
//! - Rendering the HTML page served at `/`
//!
//! ## Example Usage
//!
//! ```ignore
//! use renderer::{HttpMovieSource, Renderer, Selection};
//!
//! let renderer = Renderer::new(HttpMovieSource::new("http://localhost:3022"));
//! let view = renderer.render(&Selection::from_selectors(Some("Comedy"), Some("8"))).await;
//! for row in view.rows() {
//!     println!("{} ({})", row.title, row.band);
//! }
//! ```

pub mod band;
pub mod error;
pub mod format;
pub mod html;
pub mod source;
pub mod view;

pub use band::{RatingBand, RatingPalette};
pub use error::FetchError;
pub use format::format_release_date;
pub use html::{render_page, PageModel};
pub use source::{HttpMovieSource, LocalSource, MovieSource};
pub use view::{MovieRow, Renderer, Selection, TableView, ALL_RATINGS, EMPTY_NOTICE, ERROR_NOTICE};
