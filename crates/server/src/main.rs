//! Standalone movie API server.

use anyhow::Result;
use clap::Parser;

use server::{MovieServer, ServerConfig};

/// Movie browser HTTP server
#[derive(Parser)]
#[command(name = "movie-server", about = "Serves the movie catalog over HTTP", long_about = None)]
struct Args {
    #[command(flatten)]
    config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    server::init_tracing("info,server=debug,pipeline=debug,tower_http=debug");

    let args = Args::parse();
    MovieServer::from_config(&args.config)?.start().await
}
