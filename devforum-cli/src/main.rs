//! devforum CLI - run and check the forum backend
//!
//! Subcommands:
//! - `serve` runs the GraphQL HTTP server
//! - `check-db` verifies the database is reachable

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "devforum",
    author,
    version,
    about = "Minimal forum backend: users and posts over GraphQL",
    long_about = "Serve a GraphQL API for users and posts backed by PostgreSQL. \
                  The connection string is read from DATABASE_URL (or a .env file)."
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the GraphQL HTTP server
    Serve(commands::serve::ServeArgs),
    /// Check that the database accepts connections
    CheckDb(commands::check_db::CheckDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed flags
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::CheckDb(args) => commands::run_check_db(args).await?,
    }
    Ok(())
}
