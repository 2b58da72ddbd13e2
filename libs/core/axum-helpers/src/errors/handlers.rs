use axum::{
    http::Uri,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::AppError;

/// Fallback for requests no route matched.
pub async fn not_found(uri: Uri) -> Response {
    AppError::NotFound(format!("No route for {}", uri.path())).into_response()
}

/// Turns a handler panic into the standard 500 body.
///
/// Plug into `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("Handler panicked: {}", detail)).into_response()
}
