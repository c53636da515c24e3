//! Table view model and the renderer that produces it.
//!
//! A render cycle is one fetch followed by one view:
//! - fetch failed        -> `TableView::Failed` (table hidden, error notice)
//! - no matching movies  -> `TableView::Empty`  (table hidden, empty notice)
//! - otherwise           -> `TableView::Rows`   (table shown, one row per movie)
//!
//! Each call is independent. Nothing is cached and a slow earlier call is
//! not cancelled by a later one.

use data_loader::Movie;
use tracing::{debug, error};

use crate::band::RatingBand;
use crate::format::format_release_date;
use crate::source::MovieSource;

/// Notice shown when the fetch fails
pub const ERROR_NOTICE: &str = "Error fetching data.";

/// Notice shown when no movie matches
pub const EMPTY_NOTICE: &str = "No movies match the selected filters.";

/// Selector value meaning "no rating threshold"
pub const ALL_RATINGS: &str = "all";

/// Current genre/rating selector values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub genre: Option<String>,
    pub rating: Option<String>,
}

impl Selection {
    /// Build a selection from raw selector values.
    ///
    /// Empty values and the `"all"` rating mean no filter.
    pub fn from_selectors(genre: Option<&str>, rating: Option<&str>) -> Self {
        let genre = genre.filter(|g| !g.is_empty()).map(str::to_string);
        let rating = rating
            .filter(|r| !r.is_empty() && !r.eq_ignore_ascii_case(ALL_RATINGS))
            .map(str::to_string);
        Self { genre, rating }
    }
}

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRow {
    pub title: String,
    pub genre: String,
    pub release_date: String,
    pub director: String,
    pub rating: f64,
    pub band: RatingBand,
}

impl From<&Movie> for MovieRow {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            release_date: format_release_date(movie.release_date),
            director: movie.director.clone(),
            rating: movie.rating,
            band: RatingBand::for_rating(movie.rating),
        }
    }
}

/// What the table area shows
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Rows(Vec<MovieRow>),
    Empty { notice: String },
    Failed { notice: String },
}

impl TableView {
    /// Build the view for a fetched movie list
    pub fn from_movies(movies: &[Movie]) -> Self {
        if movies.is_empty() {
            return TableView::Empty {
                notice: EMPTY_NOTICE.to_string(),
            };
        }
        TableView::Rows(movies.iter().map(MovieRow::from).collect())
    }

    pub fn failed() -> Self {
        TableView::Failed {
            notice: ERROR_NOTICE.to_string(),
        }
    }

    pub fn is_table_visible(&self) -> bool {
        matches!(self, TableView::Rows(_))
    }

    /// Notice to show instead of the table, if any
    pub fn notice(&self) -> Option<&str> {
        match self {
            TableView::Rows(_) => None,
            TableView::Empty { notice } | TableView::Failed { notice } => Some(notice.as_str()),
        }
    }

    pub fn rows(&self) -> &[MovieRow] {
        match self {
            TableView::Rows(rows) => rows.as_slice(),
            _ => &[],
        }
    }
}

/// Fetches movies from a source and turns them into a `TableView`
pub struct Renderer<S> {
    source: S,
}

impl<S: MovieSource> Renderer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run one render cycle. Never fails: errors become `TableView::Failed`.
    pub async fn render(&self, selection: &Selection) -> TableView {
        let result = self
            .source
            .fetch_movies(selection.genre.as_deref(), selection.rating.as_deref())
            .await;

        match result {
            Ok(movies) => {
                debug!("Rendering {} movies", movies.len());
                TableView::from_movies(&movies)
            }
            Err(e) => {
                error!("There has been a problem with fetching movies: {}", e);
                TableView::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use async_trait::async_trait;

    fn movie(title: &str, rating: f64) -> Movie {
        Movie {
            title: title.to_string(),
            genre: "Drama".to_string(),
            release_date: 0,
            director: "Someone".to_string(),
            rating,
        }
    }

    struct FixedSource(Vec<Movie>);

    #[async_trait]
    impl MovieSource for FixedSource {
        async fn fetch_movies(
            &self,
            _genre: Option<&str>,
            _rating: Option<&str>,
        ) -> Result<Vec<Movie>, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl MovieSource for FailingSource {
        async fn fetch_movies(
            &self,
            _genre: Option<&str>,
            _rating: Option<&str>,
        ) -> Result<Vec<Movie>, FetchError> {
            Err(FetchError::Status {
                status: 500,
                message: None,
            })
        }
    }

    #[test]
    fn test_selection_from_selectors() {
        let selection = Selection::from_selectors(Some("Comedy"), Some("all"));
        assert_eq!(selection.genre.as_deref(), Some("Comedy"));
        assert_eq!(selection.rating, None);

        let selection = Selection::from_selectors(Some(""), Some("7"));
        assert_eq!(selection.genre, None);
        assert_eq!(selection.rating.as_deref(), Some("7"));
    }

    #[test]
    fn test_rows_are_formatted() {
        let view = TableView::from_movies(&[movie("Classic", 8.5)]);
        let rows = view.rows();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].release_date, "01/01/1970, 12:00:00 AM");
        assert_eq!(rows[0].band, RatingBand::Excellent);
        assert!(view.is_table_visible());
        assert_eq!(view.notice(), None);
    }

    #[tokio::test]
    async fn test_render_keeps_source_order() {
        let renderer = Renderer::new(FixedSource(vec![movie("A", 9.0), movie("B", 3.0)]));
        let view = renderer.render(&Selection::default()).await;

        let titles: Vec<_> = view.rows().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_render_empty_state() {
        let renderer = Renderer::new(FixedSource(vec![]));
        let view = renderer.render(&Selection::default()).await;

        assert!(!view.is_table_visible());
        assert_eq!(view.notice(), Some(EMPTY_NOTICE));
    }

    #[tokio::test]
    async fn test_render_failure_state() {
        let renderer = Renderer::new(FailingSource);
        let view = renderer.render(&Selection::default()).await;

        assert_eq!(view, TableView::failed());
        assert!(!view.is_table_visible());
        assert_eq!(view.notice(), Some(ERROR_NOTICE));
    }
}
