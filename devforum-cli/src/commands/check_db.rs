//! Database connectivity check

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use devforum_server::db::{create_pool, PgSessions, SessionProvider};
use devforum_server::PoolConfig;

/// Arguments for the check-db command
#[derive(Parser, Debug)]
pub struct CheckDbArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Seconds to wait for a connection before giving up
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,
}

/// Connect once, run a round-trip query, and report the outcome.
///
/// Failures are returned, not printed: `main` reports them on stderr.
pub async fn run_check_db(args: CheckDbArgs) -> Result<()> {
    let config = super::database_config(args.database_url)?.with_pool(PoolConfig {
        pool_size: 1,
        max_overflow: 0,
        acquire_timeout: Duration::from_secs(args.timeout),
    });
    tracing::debug!(?config, "checking database");

    let pool = create_pool(&config)
        .await
        .context("could not connect to database")?;

    let sessions = PgSessions::new(pool);
    let outcome = sessions.ping().await;
    sessions.pool().close().await;
    outcome.context("database did not answer")?;

    println!("Database connection successful ({})", config.display_target());
    Ok(())
}
