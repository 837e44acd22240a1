//! User record

use sqlx::FromRow;

/// User row from the `users` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Stored exactly as supplied by the client.
    pub password_hash: String,
}

/// Fields for inserting a user; `id` is generated by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
