//! In-memory session provider
//!
//! Isolated store with the same constraints as the Postgres schema
//! (unique usernames, posts must reference an existing user). Used by the
//! test suites in place of a live database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::{DbError, Session, SessionProvider};
use crate::models::{NewPost, NewUser, Post, PostWithAuthor, User};

#[derive(Debug, Default)]
struct MemoryStore {
    users: Vec<User>,
    posts: Vec<Post>,
}

impl MemoryStore {
    fn next_id(len: usize) -> Result<i32, DbError> {
        i32::try_from(len + 1).map_err(|_| DbError::Unavailable("id space exhausted".to_owned()))
    }
}

/// Session provider over a process-local store
#[derive(Clone, Default)]
pub struct MemorySessions {
    store: Arc<Mutex<MemoryStore>>,
}

impl MemorySessions {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionProvider for MemorySessions {
    async fn session(&self) -> Result<Box<dyn Session>, DbError> {
        let store = self.store.clone().lock_owned().await;
        Ok(Box::new(MemorySession { store }))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

/// Holds the store lock for the session's lifetime; released on drop.
pub struct MemorySession {
    store: OwnedMutexGuard<MemoryStore>,
}

#[async_trait]
impl Session for MemorySession {
    async fn insert_user(&mut self, user: NewUser) -> Result<User, DbError> {
        if self.store.users.iter().any(|u| u.username == user.username) {
            return Err(DbError::UniqueViolation {
                constraint: "users_username_key".to_owned(),
            });
        }

        let user = User {
            id: MemoryStore::next_id(self.store.users.len())?,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
        };
        self.store.users.push(user.clone());
        Ok(user)
    }

    async fn insert_post(&mut self, post: NewPost) -> Result<Post, DbError> {
        if !self.store.users.iter().any(|u| u.id == post.author_id) {
            return Err(DbError::ForeignKeyViolation {
                constraint: "posts_author_id_fkey".to_owned(),
            });
        }

        let post = Post {
            id: MemoryStore::next_id(self.store.posts.len())?,
            title: post.title,
            content: post.content,
            author_id: post.author_id,
        };
        self.store.posts.push(post.clone());
        Ok(post)
    }

    async fn find_user(&mut self, id: i32) -> Result<Option<User>, DbError> {
        Ok(self.store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn posts_with_authors(&mut self) -> Result<Vec<PostWithAuthor>, DbError> {
        let store = &*self.store;
        Ok(store
            .posts
            .iter()
            .filter_map(|post| {
                store
                    .users
                    .iter()
                    .find(|u| u.id == post.author_id)
                    .map(|author| PostWithAuthor {
                        post: post.clone(),
                        author: author.clone(),
                    })
            })
            .collect())
    }
}
