//! Errors raised while fetching movies for display.

use pipeline::QueryError;
use thiserror::Error;

/// Why a fetch produced no movie list.
///
/// The display treats every variant the same way (error notice, no
/// retry); the variants exist so logs show the real cause.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout or body decoding failure
    #[error("Request to movie service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("Network response was not ok, status: {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },

    /// An in-process query rejected its parameters
    #[error("Query rejected: {0}")]
    Rejected(#[from] QueryError),
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(" ({message})"),
        None => String::new(),
    }
}
