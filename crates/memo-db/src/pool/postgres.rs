//! PostgreSQL connection pool management
//!
//! Pool sizing and the connection URL come from
//! [`memo_common::config::DatabaseConfig`]; this module only adds the
//! connection-lifecycle knobs that belong to the pool itself.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use memo_common::config::DatabaseConfig;
use memo_common::{AppConfig, ConfigError};

/// Connection lifecycle settings for the pool
#[derive(Debug, Clone)]
pub struct PoolSettings {
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
    /// Maximum idle time before a connection is closed
    pub idle_timeout: Duration,
    /// Maximum lifetime of a connection
    pub max_lifetime: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
        }
    }
}

/// Errors from pool construction
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Connect(#[from] sqlx::Error),
}

/// Create a new PostgreSQL connection pool with default lifecycle settings
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with(config, &PoolSettings::default()).await
}

/// Create a new PostgreSQL connection pool with explicit lifecycle settings
pub async fn create_pool_with(
    config: &DatabaseConfig,
    settings: &PoolSettings,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(settings.acquire_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect(&config.url)
        .await
}

/// Create a connection pool from the environment
///
/// Fails when `DATABASE_URL` is not set rather than guessing a local
/// default.
pub async fn create_pool_from_env() -> Result<PgPool, PoolError> {
    let config = AppConfig::from_env()?;
    Ok(create_pool(&config.database).await?)
}
