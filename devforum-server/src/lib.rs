//! devforum-server: GraphQL forum backend
//!
//! Exposes users and posts over a single `/graphql` endpoint, backed by a
//! pooled PostgreSQL connection. Layers, bottom-up:
//!
//! - [`db`] - connection pool, schema bootstrap, scoped sessions
//! - [`models`] - `User` and `Post` records
//! - [`api`] - `getPosts`, `createUser`, `createPost`
//! - [`http`] - axum router, health check, graceful shutdown

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod state;

pub use config::{DatabaseConfig, PoolConfig};
pub use error::{ServerError, ServerResult};
pub use state::AppState;
