//! HTTP error mapping
//!
//! Converts core errors into JSON responses. Write-gate failures carry
//! their user-displayable message through unchanged; storage failures are
//! logged in full and reported with a generic message only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use tsq_common::Error;

/// Wrapper turning [`tsq_common::Error`] into an HTTP response
#[derive(Debug)]
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            Error::InvalidRating(msg)
            | Error::InvalidReviewText(msg)
            | Error::InvalidInput(msg)
            | Error::VerificationFailed(msg) => (StatusCode::BAD_REQUEST, msg),
            Error::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            err => {
                // Internals go to the log, never over the wire
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side. Please try again.".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
