//! API error types rendered as GraphQL errors
//!
//! Each variant carries a stable `extensions.code`. Store internals are
//! logged, never returned to the client.

use async_graphql::ErrorExtensions;

use crate::db::DbError;

/// API error type with a client-facing code
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Referenced record does not exist
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    /// Store constraint rejected the write
    #[error("{message}")]
    Conflict { message: String },

    /// Store unreachable or pool exhausted
    #[error("the database is unavailable, try again later")]
    Unavailable,

    /// Anything else (logged)
    #[error("an internal error occurred")]
    Internal,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Unavailable => "SERVICE_UNAVAILABLE",
            Self::Internal => "INTERNAL_ERROR",
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { constraint } | DbError::ForeignKeyViolation { constraint } => {
                Self::Conflict {
                    message: format!("constraint '{}' violated", constraint),
                }
            }
            DbError::PoolExhausted | DbError::Unavailable(_) => {
                tracing::warn!("Database unavailable: {}", e);
                Self::Unavailable
            }
            DbError::Sqlx(_) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                Self::Internal
            }
        }
    }
}
