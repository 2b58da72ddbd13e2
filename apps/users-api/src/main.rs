use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::RetryConfig;
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_users::{InMemoryUserRepository, PgUserRepository, UserRepository};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, UserStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let store = match config.database.clone() {
        Some(database) => {
            let db = connect_from_config_with_retry(database, RetryConfig::default())
                .await
                .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

            run_migrations::<Migrator>(&db, config.app.name)
                .await
                .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;

            let existing = PgUserRepository::new(db.clone())
                .count()
                .await
                .map_err(|e| eyre::eyre!("Failed to read users table: {}", e))?;
            info!(users = existing, "Connected to user store");

            UserStore::Postgres(db)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory and lost on restart");
            UserStore::InMemory(InMemoryUserRepository::new())
        }
    };

    let state = AppState::new(config, store);

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    // - /health: liveness check with app name/version
    // - /ready: readiness check against the user store
    let app = router
        .merge(health_router(state.config.app))
        .merge(api::ready_router(state.clone()));

    let server_config = state.config.server.clone();
    info!(
        docs = axum_helpers::server::DOCS_PATH,
        "Starting {} v{}", state.config.app.name, state.config.app.version
    );

    // State moves here for cleanup
    create_production_app(app, &server_config, async move {
        info!("Shutting down: closing user store");
        state.close().await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
