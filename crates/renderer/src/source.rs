//! Where the renderer gets its movies from.
//!
//! - `HttpMovieSource` calls `GET /api/movies` on a running server
//! - `LocalSource` runs the query engine in-process (server-side pages)
//!
//! Both take the raw `genre`/`rating` selector values; validation stays
//! with the query engine.

use async_trait::async_trait;
use data_loader::Movie;
use pipeline::{MovieQuery, QueryEngine};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::FetchError;

/// A provider of filtered, sorted movie lists
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Fetch movies matching the optional filters.
    ///
    /// Empty strings are treated as absent.
    async fn fetch_movies(
        &self,
        genre: Option<&str>,
        rating: Option<&str>,
    ) -> Result<Vec<Movie>, FetchError>;
}

/// Body of a 4xx response from the movie API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the movie HTTP API.
///
/// Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpMovieSource {
    client: Client,
    base_url: String,
}

impl HttpMovieSource {
    /// Create a client for the server at `base_url`
    /// (e.g., "http://localhost:3022")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Using movie service at {}", base_url);
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the distinct genres known to the server
    pub async fn fetch_genres(&self) -> Result<Vec<String>, FetchError> {
        let url = format!("{}/api/genres", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MovieSource for HttpMovieSource {
    async fn fetch_movies(
        &self,
        genre: Option<&str>,
        rating: Option<&str>,
    ) -> Result<Vec<Movie>, FetchError> {
        let url = format!("{}/api/movies", self.base_url);

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(genre) = genre.filter(|g| !g.is_empty()) {
            params.push(("genre", genre));
        }
        if let Some(rating) = rating.filter(|r| !r.is_empty()) {
            params.push(("rating", rating));
        }

        debug!("GET {} {:?}", url, params);
        let response = self.client.get(&url).query(&params).send().await?;
        let response = check_status(response).await?;

        Ok(response.json().await?)
    }
}

/// Turn a non-success response into `FetchError::Status`,
/// keeping the server's error message when it sent one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);

    Err(FetchError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Answers from an in-process query engine
#[derive(Clone)]
pub struct LocalSource {
    engine: QueryEngine,
}

impl LocalSource {
    pub fn new(engine: QueryEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &QueryEngine {
        &self.engine
    }
}

#[async_trait]
impl MovieSource for LocalSource {
    async fn fetch_movies(
        &self,
        genre: Option<&str>,
        rating: Option<&str>,
    ) -> Result<Vec<Movie>, FetchError> {
        let query = MovieQuery::from_params(genre, rating)?;
        Ok(self.engine.run(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::MovieCatalog;
    use std::sync::Arc;

    fn build_local_source() -> LocalSource {
        let catalog = MovieCatalog::from_movies(vec![
            Movie {
                title: "Superbad".to_string(),
                genre: "Comedy".to_string(),
                release_date: 1187308800,
                director: "Greg Mottola".to_string(),
                rating: 7.6,
            },
            Movie {
                title: "Die Hard".to_string(),
                genre: "Action".to_string(),
                release_date: 584928000,
                director: "John McTiernan".to_string(),
                rating: 8.2,
            },
        ])
        .unwrap();
        LocalSource::new(QueryEngine::new(Arc::new(catalog)))
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = HttpMovieSource::new("http://localhost:3022/");
        assert_eq!(source.base_url(), "http://localhost:3022");
    }

    #[tokio::test]
    async fn test_local_source_filters() {
        let source = build_local_source();

        let movies = source.fetch_movies(Some("comedy"), None).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Superbad");

        let movies = source.fetch_movies(None, Some("8")).await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Superbad");
    }

    #[tokio::test]
    async fn test_local_source_rejects_bad_rating() {
        let source = build_local_source();

        let err = source.fetch_movies(None, Some("11")).await.unwrap_err();
        assert!(matches!(err, FetchError::Rejected(_)));
    }
}
