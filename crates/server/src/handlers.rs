//! HTTP handlers for the movie API and the landing page.

use std::path::Path;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use data_loader::Movie;
use pipeline::{MovieQuery, QueryEngine};
use renderer::{render_page, LocalSource, PageModel, RatingPalette, Renderer, Selection};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: QueryEngine,
    pub palette: RatingPalette,
}

impl AppState {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            engine,
            palette: RatingPalette::default(),
        }
    }
}

/// Raw `genre`/`rating` query parameters.
///
/// `rating` stays a string so bad values reach our own validation and
/// produce the documented error body.
#[derive(Debug, Default, Deserialize)]
pub struct MovieParams {
    pub genre: Option<String>,
    pub rating: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub movies: usize,
}

/// Create the router with all endpoints.
///
/// When `public_dir` is given, unknown paths are served from it.
pub fn create_router(state: AppState, public_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .route("/api/movies", get(list_movies))
        .route("/api/genres", get(list_genres));

    let router = match public_dir {
        Some(dir) if dir.is_dir() => router.fallback_service(ServeDir::new(dir)),
        Some(dir) => {
            warn!("Public directory {} not found, static assets disabled", dir.display());
            router
        }
        None => router,
    };

    router.with_state(state)
}

/// GET /api/movies?genre=<string>&rating=<number>
///
/// Movies of `genre` (case-insensitive) rated strictly below `rating`,
/// highest rated first. Both parameters are optional.
async fn list_movies(
    State(state): State<AppState>,
    params: Result<Query<MovieParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::MalformedQuery(e.body_text()))?;

    let query = MovieQuery::from_params(params.genre.as_deref(), params.rating.as_deref())?;
    let movies = state.engine.run(&query);
    debug!("Returning {} movies", movies.len());

    Ok(Json(movies))
}

/// GET /api/genres
async fn list_genres(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.engine.catalog().genres())
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        movies: state.engine.catalog().len(),
    })
}

/// GET /?genre=<string>&rating=<number|all>
///
/// Server-rendered page. Bad parameters show the error notice rather
/// than failing the request.
async fn index_page(
    State(state): State<AppState>,
    params: Result<Query<MovieParams>, QueryRejection>,
) -> Html<String> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            warn!("Ignoring malformed page query: {}", e.body_text());
            MovieParams::default()
        }
    };

    let selection = Selection::from_selectors(params.genre.as_deref(), params.rating.as_deref());
    let renderer = Renderer::new(LocalSource::new(state.engine.clone()));
    let view = renderer.render(&selection).await;

    let model = PageModel {
        genres: state.engine.catalog().genres(),
        selection,
        view,
    };
    Html(render_page(&model, &state.palette))
}
