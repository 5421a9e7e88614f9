//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. Handlers never touch
//! the pool directly; they borrow one connection per request through
//! [`ScopedConnection`](super::ScopedConnection).

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::{ConfigError, ServiceConfig};

/// How long a request waits for a free connection before failing with 500.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Pool construction error
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Create a PostgreSQL connection pool from service configuration.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the first
/// connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let config = ServiceConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &ServiceConfig) -> Result<PgPool, PoolError> {
    let options = config.connect_options()?;
    let pool = create_pool_with_options(options, config.max_connections).await?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `options` - PostgreSQL connect options
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await
}
