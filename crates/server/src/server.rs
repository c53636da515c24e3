//! HTTP server wiring: middleware, binding and shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use data_loader::MovieCatalog;
use pipeline::QueryEngine;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::handlers::{create_router, AppState};

/// HTTP server for the movie browser
pub struct MovieServer {
    router: Router,
    bind_addr: SocketAddr,
}

impl MovieServer {
    /// Create a server for an already loaded catalog
    pub fn new(config: &ServerConfig, catalog: Arc<MovieCatalog>) -> Self {
        let state = AppState::new(QueryEngine::new(catalog));

        let router = create_router(state, Some(config.public_dir.as_path())).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        );

        Self {
            router,
            bind_addr: config.bind_addr(),
        }
    }

    /// Load the catalog named by `config` and create the server
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let catalog = MovieCatalog::load(config.data_file.as_deref())
            .context("Failed to load movie catalog")?;
        info!("Catalog ready: {} movies", catalog.len());
        Ok(Self::new(config, Arc::new(catalog)))
    }

    /// The fully layered router, for serving it some other way
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<()> {
        info!("Starting movie server on {}", self.bind_addr);

        let server = axum::Server::try_bind(&self.bind_addr)
            .with_context(|| format!("Failed to bind {}", self.bind_addr))?
            .serve(self.router.into_make_service());

        info!("Server listening on {}", self.bind_addr);
        info!("Available endpoints:");
        info!("   GET    /                  - Movie page");
        info!("   GET    /api/movies        - Filtered movies (genre, rating)");
        info!("   GET    /api/genres        - Distinct genres");
        info!("   GET    /health            - Health check");

        server
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
