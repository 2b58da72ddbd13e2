use axum::Router;
use domain_users::{PgUserRepository, UserService, handlers};

use crate::state::{AppState, UserStore};

pub fn router(state: &AppState) -> Router {
    match &state.store {
        UserStore::Postgres(db) => {
            let repository = PgUserRepository::new(db.clone());
            handlers::router(UserService::new(repository))
        }
        UserStore::InMemory(repository) => handlers::router(UserService::new(repository.clone())),
    }
}
