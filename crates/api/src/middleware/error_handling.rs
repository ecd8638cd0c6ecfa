//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and `{ "error": message }` bodies.
//! Data-store and internal failures never echo their cause to the caller; the
//! cause is logged here and the body carries a generic message instead.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use salonfront_core::errors::SalonError;
use serde_json::json;
use tracing::error;

/// Body used whenever a failure's detail must stay server-side.
pub const GENERIC_ERROR_MESSAGE: &str = "Internal server error";

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub SalonError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SalonError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            SalonError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            SalonError::OperationFailed(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, (*message).to_string())
            }
            SalonError::Database(err) => {
                error!(error = ?err, "unhandled database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
            SalonError::Internal(detail) => {
                error!(detail = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows using `?` on `SalonResult` inside handlers.
impl From<SalonError> for AppError {
    fn from(err: SalonError) -> Self {
        AppError(err)
    }
}

/// Maps a SalonError to an HTTP response
pub fn map_error(err: SalonError) -> Response {
    AppError(err).into_response()
}

/// Converts a panic inside a request handler into a 500 response.
///
/// Logged separately from query failures so the two show up distinctly in
/// the server logs, while callers see the same generic body.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": GENERIC_ERROR_MESSAGE })),
    )
        .into_response()
}
