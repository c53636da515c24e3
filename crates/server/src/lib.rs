//! Server crate for the movie browser.
//!
//! This crate exposes the query engine over HTTP and serves the
//! server-rendered movie page.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::ApiError;
pub use handlers::{create_router, AppState};
pub use server::MovieServer;

/// Initialize logging from `RUST_LOG`, falling back to `default_filter`
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}
