//! Database connection pool management
//!
//! Uses sqlx PgPool with an explicit bound of `pool_size + max_overflow`
//! connections. `pool_size` connections are kept warm; demand beyond the
//! bound waits up to `acquire_timeout` and then fails with `PoolTimedOut`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{DatabaseConfig, PoolConfig};
use crate::error::ServerResult;

/// Create the pool and bootstrap the schema: everything `serve` needs
/// before it can accept requests.
pub async fn connect(config: &DatabaseConfig) -> ServerResult<PgPool> {
    let pool = create_pool(config).await?;
    super::ensure_schema(&pool).await?;

    tracing::info!(
        target_db = %config.display_target(),
        connections = pool.size(),
        "database ready"
    );
    Ok(pool)
}

/// Create a PostgreSQL connection pool with default sizing.
///
/// Connects eagerly so an unreachable store fails at startup.
///
/// # Example
///
/// ```ignore
/// let config = DatabaseConfig::from_env()?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config, config.pool).await
}

/// Create a PostgreSQL connection pool with custom sizing.
pub async fn create_pool_with_options(
    config: &DatabaseConfig,
    pool: PoolConfig,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        target_db = %config.display_target(),
        pool_size = pool.pool_size,
        max_overflow = pool.max_overflow,
        "creating connection pool"
    );

    PgPoolOptions::new()
        .min_connections(pool.pool_size.min(pool.max_connections()))
        .max_connections(pool.max_connections())
        .acquire_timeout(pool.acquire_timeout)
        .connect_with(config.connect_options().clone())
        .await
}
