//! Schema management CLI for the users table: `migration up`, `migration down`, `migration status`.
//! Reads `DATABASE_URL` like the service does.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
