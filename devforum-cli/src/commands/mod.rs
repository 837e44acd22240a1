//! Command implementations for the devforum CLI

pub mod check_db;
pub mod serve;

pub use check_db::run_check_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use devforum_server::DatabaseConfig;

/// Resolve the database URL from the flag (which already falls back to
/// `DATABASE_URL`) and validate it.
fn database_config(database_url: Option<String>) -> Result<DatabaseConfig> {
    let url = database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;
    DatabaseConfig::new(&url).context("invalid DATABASE_URL")
}
