use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;

use crate::responses::{FailureBody, messages};
use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("name, email and phone are all required")]
    PresenceMissing,

    #[error("{} field(s) failed validation", .0.len())]
    FieldFormatInvalid(Vec<FieldViolation>),

    #[error("User with email '{0}' already exists")]
    EmailConflict(String),

    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal error: {0}")]
    Unhandled(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<JsonRejection> for UserError {
    fn from(rejection: JsonRejection) -> Self {
        UserError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            UserError::PresenceMissing => {
                tracing::info!("Rejected payload with missing fields");
                (
                    StatusCode::BAD_REQUEST,
                    FailureBody::new(messages::FIELDS_REQUIRED),
                )
            }
            UserError::FieldFormatInvalid(violations) => {
                tracing::info!(?violations, "Rejected payload failing format rules");
                (
                    StatusCode::BAD_REQUEST,
                    FailureBody::new(messages::VALIDATION_ERROR).with_errors(violations),
                )
            }
            UserError::EmailConflict(email) => {
                tracing::info!(%email, "Rejected duplicate email");
                (
                    StatusCode::CONFLICT,
                    FailureBody::new(messages::EMAIL_EXISTS).with_empty_data(),
                )
            }
            UserError::NotFound(id) => {
                tracing::info!(user_id = %id, "User not found");
                (
                    StatusCode::NOT_FOUND,
                    FailureBody::new(messages::USER_NOT_FOUND),
                )
            }
            UserError::MalformedBody(detail) => {
                tracing::warn!(%detail, "Rejected malformed request body");
                (
                    StatusCode::BAD_REQUEST,
                    FailureBody::new(messages::MALFORMED_BODY),
                )
            }
            // Cause is logged by AppError and never reaches the client
            UserError::Unhandled(detail) => {
                return AppError::InternalServerError(detail).into_response();
            }
        };

        (status, Json(body)).into_response()
    }
}
