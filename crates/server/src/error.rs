//! Errors returned by the HTTP handlers.
//!
//! Every error is sent as `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pipeline::QueryError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ApiError {
    /// A parameter failed validation
    #[error(transparent)]
    InvalidParameter(#[from] QueryError),

    /// The query string could not be decoded at all
    #[error("{0}")]
    MalformedQuery(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) | ApiError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Rejecting request with {}: {:?}", status, self);
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
