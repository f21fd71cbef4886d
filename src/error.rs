//! Errors returned by page and fragment handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// A request referenced a record that is not in the fixtures.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("no approval candidate with id `{0}`")]
    UnknownCandidate(String),

    #[error("no AI report with id `{0}`")]
    UnknownReport(String),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::warn!(name: "page.not_found", error = %self, "Fragment lookup failed");
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
    }
}
