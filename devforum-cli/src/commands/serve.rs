//! HTTP server command for the devforum GraphQL API

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use devforum_server::config::{DEFAULT_MAX_OVERFLOW, DEFAULT_POOL_SIZE};
use devforum_server::db::{self, PgSessions};
use devforum_server::http::{run_server, ServerConfig};
use devforum_server::PoolConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "DEVFORUM_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Connections kept open in the pool
    #[arg(long, env = "DEVFORUM_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,

    /// Extra connections allowed under load
    #[arg(long, env = "DEVFORUM_MAX_OVERFLOW", default_value_t = DEFAULT_MAX_OVERFLOW)]
    pub max_overflow: u32,

    /// Seconds to wait for a free connection before failing the request
    #[arg(long, env = "DEVFORUM_ACQUIRE_TIMEOUT", default_value_t = 30)]
    pub acquire_timeout: u64,

    /// Seconds before an in-flight request is abandoned
    #[arg(long, env = "DEVFORUM_REQUEST_TIMEOUT", default_value_t = 30)]
    pub request_timeout: u64,
}

impl ServeArgs {
    fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            pool_size: self.pool_size,
            max_overflow: self.max_overflow,
            acquire_timeout: Duration::from_secs(self.acquire_timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool_config = args.pool_config();
    let database = super::database_config(args.database_url)?.with_pool(pool_config);

    tracing::info!(
        database = %database.display_target(),
        pool_size = pool_config.pool_size,
        max_overflow = pool_config.max_overflow,
        "Starting devforum server on {}",
        args.bind
    );

    let pool = db::connect(&database)
        .await
        .context("Failed to prepare database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        request_timeout: Duration::from_secs(args.request_timeout),
    };

    // Blocks until shutdown
    run_server(Arc::new(PgSessions::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
