pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body for failures that are not tied to a domain: unmatched routes and
/// internal errors.
///
/// ```json
/// { "error": "Internal Server Error!" }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Fixed, client-facing description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Cross-cutting application error.
///
/// Domain errors convert into this for everything they do not render
/// themselves. The wrapped detail is logged and never sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(detail) => {
                tracing::info!(%detail, "Not found");
                (StatusCode::NOT_FOUND, messages::NOT_FOUND)
            }
            AppError::InternalServerError(detail) => {
                tracing::error!(%detail, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL_ERROR)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
