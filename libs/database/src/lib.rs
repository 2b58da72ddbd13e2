//! PostgreSQL connectivity for the users service
//!
//! Wraps SeaORM connection setup so apps do not repeat pool tuning,
//! retry-on-startup, migrations or readiness probing.
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use database::RetryConfig;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, RetryConfig::default()).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "users_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, RetryConfig, retry_with_backoff};
