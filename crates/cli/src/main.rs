use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use renderer::{HttpMovieSource, RatingPalette, Renderer, Selection, TableView, ALL_RATINGS};
use server::{MovieServer, ServerConfig};
use tracing::info;

/// Reel - browse a movie catalog by genre and rating
#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Movie catalog server and terminal browser", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[command(flatten)]
        config: ServerConfig,
    },

    /// List movies from a running server
    List {
        /// Base URL of the server
        #[arg(long, env = "MOVIES_URL", default_value = "http://localhost:3022")]
        url: String,

        /// Only show this genre (case-insensitive)
        #[arg(long)]
        genre: Option<String>,

        /// Only show movies rated below this value (1-10, or "all")
        #[arg(long, default_value = ALL_RATINGS)]
        rating: String,
    },

    /// List the genres a running server knows about
    Genres {
        /// Base URL of the server
        #[arg(long, env = "MOVIES_URL", default_value = "http://localhost:3022")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Serve { config } => handle_serve(config).await?,
        Commands::List { url, genre, rating } => handle_list(url, genre, rating).await?,
        Commands::Genres { url } => handle_genres(url).await?,
    }

    Ok(())
}

/// Handle the 'serve' command
async fn handle_serve(config: ServerConfig) -> Result<()> {
    info!("Serving movies on {}", config.bind_addr());
    MovieServer::from_config(&config)?.start().await
}

/// Handle the 'list' command
async fn handle_list(url: String, genre: Option<String>, rating: String) -> Result<()> {
    let renderer = Renderer::new(HttpMovieSource::new(url));
    let selection = Selection::from_selectors(genre.as_deref(), Some(rating.as_str()));

    let view = renderer.render(&selection).await;
    print_view(&view, &RatingPalette::default());
    Ok(())
}

/// Handle the 'genres' command
async fn handle_genres(url: String) -> Result<()> {
    let source = HttpMovieSource::new(url);
    let genres = source
        .fetch_genres()
        .await
        .context("Failed to fetch genres")?;

    println!("{}", "Genres:".bold().blue());
    for genre in genres {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Print the table, or the notice when there is nothing to show
fn print_view(view: &TableView, palette: &RatingPalette) {
    match view {
        TableView::Rows(rows) => {
            println!(
                "{}",
                format!(
                    "{:<32} {:<12} {:<24} {:<20} {:>6}",
                    "Title", "Genre", "Release Date", "Director", "Rating"
                )
                .bold()
                .blue()
            );
            for row in rows {
                println!(
                    "{:<32} {:<12} {:<24} {:<20} {}",
                    row.title,
                    row.genre,
                    row.release_date,
                    row.director,
                    format!("{:>6}", row.rating).color(palette.color_for(row.band))
                );
            }
        }
        TableView::Empty { notice } => println!("{}", notice.yellow()),
        TableView::Failed { notice } => println!("{}", notice.red()),
    }
}
