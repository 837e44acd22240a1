//! Scoped store sessions
//!
//! A [`SessionProvider`] hands out one [`Session`] per unit of work. The
//! session owns whatever it holds (a pooled connection, a store lock) and
//! gives it back when dropped, so release happens on success, on `?`
//! early-returns, and on cancellation alike.

use async_trait::async_trait;

use super::DbError;
use crate::models::{NewPost, NewUser, Post, PostWithAuthor, User};

/// Short-lived handle to the store for one unit of work.
///
/// Each write is a single auto-committed statement.
#[async_trait]
pub trait Session: Send {
    /// Insert a user and return the stored row (with generated id).
    async fn insert_user(&mut self, user: NewUser) -> Result<User, DbError>;

    /// Insert a post and return the stored row (with generated id).
    ///
    /// Fails with [`DbError::ForeignKeyViolation`] when `author_id` does not
    /// reference an existing user.
    async fn insert_post(&mut self, post: NewPost) -> Result<Post, DbError>;

    /// Look up a user by id.
    async fn find_user(&mut self, id: i32) -> Result<Option<User>, DbError>;

    /// Every post joined with its author, ordered by post id.
    async fn posts_with_authors(&mut self) -> Result<Vec<PostWithAuthor>, DbError>;
}

/// Source of sessions, shared by every in-flight request.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Acquire a session. Waits for capacity; fails when none frees up in time.
    async fn session(&self) -> Result<Box<dyn Session>, DbError>;

    /// Round-trip to the store to prove it is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}
