//! Store error classification

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    #[error("connection pool exhausted")]
    PoolExhausted,

    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return Self::UniqueViolation {
                    constraint: db.constraint().unwrap_or("unique").to_owned(),
                };
            }
            if db.is_foreign_key_violation() {
                return Self::ForeignKeyViolation {
                    constraint: db.constraint().unwrap_or("foreign key").to_owned(),
                };
            }
        }

        match e {
            sqlx::Error::PoolTimedOut => Self::PoolExhausted,
            sqlx::Error::PoolClosed => Self::Unavailable("pool closed".to_owned()),
            sqlx::Error::Io(io) => Self::Unavailable(io.to_string()),
            sqlx::Error::Tls(tls) => Self::Unavailable(tls.to_string()),
            other => Self::Sqlx(other),
        }
    }
}
