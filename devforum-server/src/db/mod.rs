//! Database layer - connection pool, schema bootstrap, and sessions
//!
//! # Design Principles
//!
//! - One pool per process, injected as a [`SessionProvider`] - no globals
//! - One session per API operation, released on drop on every exit path
//! - Rely on DB constraints, classify violations - no check-then-insert
//! - Post listing uses a JOIN - no N+1 author lookups

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod session;

pub use error::DbError;
pub use memory::MemorySessions;
pub use pool::{connect, create_pool, create_pool_with_options};
pub use postgres::PgSessions;
pub use schema::ensure_schema;
pub use session::{Session, SessionProvider};
