//! Database configuration - connection string and pool sizing
//!
//! Configuration is loaded from environment variables:
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//!
//! A missing or malformed connection string is rejected here, before any
//! connection is attempted, so the process fails at startup.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// Environment variable holding the connection string
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Connections kept open in the pool
pub const DEFAULT_POOL_SIZE: u32 = 5;

/// Extra connections allowed on top of the pool size under load
pub const DEFAULT_MAX_OVERFLOW: u32 = 10;

/// How long a request waits for a free connection before giving up
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration errors (fatal at startup)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} environment variable is missing")]
    Missing { var: &'static str },

    #[error("malformed database URL: {reason}")]
    Malformed { reason: String },
}

/// Pool sizing: `pool_size` warm connections plus up to `max_overflow` more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pub pool_size: u32,
    pub max_overflow: u32,
    pub acquire_timeout: Duration,
}

impl PoolConfig {
    /// Hard upper bound on open connections.
    pub fn max_connections(&self) -> u32 {
        self.pool_size.saturating_add(self.max_overflow).max(1)
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            max_overflow: DEFAULT_MAX_OVERFLOW,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Validated database configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    connect_options: PgConnectOptions,
    pub pool: PoolConfig,
}

impl DatabaseConfig {
    /// Validate a connection string.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - `postgres://` or `postgresql://` scheme
    /// - Parses as PostgreSQL connect options
    ///
    /// # Example
    /// ```
    /// use devforum_server::DatabaseConfig;
    ///
    /// assert!(DatabaseConfig::new("postgres://localhost/devforum").is_ok());
    /// assert!(DatabaseConfig::new("").is_err());
    /// assert!(DatabaseConfig::new("mysql://localhost/devforum").is_err());
    /// ```
    pub fn new(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(ConfigError::Missing {
                var: DATABASE_URL_ENV,
            });
        }

        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::Malformed {
                reason: "expected a postgres:// or postgresql:// URL".to_owned(),
            });
        }

        let connect_options = url
            .parse::<PgConnectOptions>()
            .map_err(|e| ConfigError::Malformed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            connect_options,
            pool: PoolConfig::default(),
        })
    }

    /// Create config from the `DATABASE_URL` environment variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(DATABASE_URL_ENV).map_err(|_| ConfigError::Missing {
            var: DATABASE_URL_ENV,
        })?;
        Self::new(&url)
    }

    /// Replace the pool sizing.
    pub fn with_pool(mut self, pool: PoolConfig) -> Self {
        self.pool = pool;
        self
    }

    pub fn connect_options(&self) -> &PgConnectOptions {
        &self.connect_options
    }

    /// `host:port/database`, safe to log (no credentials).
    pub fn display_target(&self) -> String {
        let opts = &self.connect_options;
        format!(
            "{}:{}/{}",
            opts.get_host(),
            opts.get_port(),
            opts.get_database().unwrap_or_default()
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("target", &self.display_target())
            .field("pool", &self.pool)
            .finish()
    }
}
