use axum::{Router, routing::get};

use crate::state::AppState;

pub mod health;
pub mod users;

/// Domain routes, each sub-router with its state already applied.
/// `create_router` adds docs and the cross-cutting layers on top.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// `/ready`, checking the user store
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
