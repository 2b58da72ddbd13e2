//! Application state management.
//!
//! Built once in `main` and handed to the routers, which take what they need
//! from it. Holds the configuration and the user store.

use database::postgres::DatabaseConnection;
use domain_users::InMemoryUserRepository;
use tracing::info;

/// Where user records live
#[derive(Clone)]
pub enum UserStore {
    /// PostgreSQL connection pool
    Postgres(DatabaseConnection),
    /// Process-local store, used when no database is configured
    InMemory(InMemoryUserRepository),
}

/// Shared application state.
///
/// Cloning is cheap: the pool and the in-memory store are both behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    pub store: UserStore,
}

impl AppState {
    pub fn new(config: crate::config::Config, store: UserStore) -> Self {
        Self { config, store }
    }

    /// Release the store's resources. Called once during shutdown.
    pub async fn close(self) {
        match self.store {
            UserStore::Postgres(db) => match database::postgres::close(db).await {
                Ok(()) => info!("PostgreSQL connection closed successfully"),
                Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
            },
            UserStore::InMemory(_) => info!("In-memory user store dropped"),
        }
    }
}
