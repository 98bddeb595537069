//! PostgreSQL connection pool management

use board_common::{AppConfig, AppError, DatabaseConfig};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::debug;

/// Create a new PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await
}

/// Create a connection pool from the DATABASE_URL environment variable
pub async fn create_pool_from_env() -> Result<PgPool, AppError> {
    let config = AppConfig::from_env()?;
    debug!(app = %config.app.name, env = ?config.app.env, "Loaded database configuration");
    create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
}
