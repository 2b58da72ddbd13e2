//! Readiness check against the configured user store.

use crate::state::{AppState, UserStore};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use domain_users::UserRepository;

/// Reports `database: connected` only when the store answers a query.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let store_check: HealthCheckFuture<'_> = match &state.store {
        UserStore::Postgres(db) => Box::pin(async move {
            database::postgres::check_health(db)
                .await
                .map_err(|e| format!("Database ping failed: {}", e))
        }),
        UserStore::InMemory(repository) => Box::pin(async move {
            repository
                .count()
                .await
                .map(|_| ())
                .map_err(|e| format!("In-memory store failed: {}", e))
        }),
    };

    match run_health_checks(vec![("database", store_check)]).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}
