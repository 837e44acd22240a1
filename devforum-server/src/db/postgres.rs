//! PostgreSQL sessions backed by the process-wide pool

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres, Row};

use super::{DbError, Session, SessionProvider};
use crate::models::{NewPost, NewUser, Post, PostWithAuthor, User};

/// Session provider over a `PgPool`
#[derive(Clone)]
pub struct PgSessions {
    pool: PgPool,
}

impl PgSessions {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SessionProvider for PgSessions {
    async fn session(&self) -> Result<Box<dyn Session>, DbError> {
        let conn = self.pool.acquire().await?;
        tracing::trace!(
            idle = self.pool.num_idle(),
            size = self.pool.size(),
            "session acquired"
        );
        Ok(Box::new(PgSession { conn }))
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// One pooled connection; returned to the pool when dropped.
pub struct PgSession {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl Session for PgSession {
    async fn insert_user(&mut self, user: NewUser) -> Result<User, DbError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(user)
    }

    async fn insert_post(&mut self, post: NewPost) -> Result<Post, DbError> {
        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (title, content, author_id)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, author_id
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(post)
    }

    async fn find_user(&mut self, id: i32) -> Result<Option<User>, DbError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(user)
    }

    async fn posts_with_authors(&mut self) -> Result<Vec<PostWithAuthor>, DbError> {
        // Single JOIN instead of one author lookup per post
        let rows = sqlx::query(
            r#"
            SELECT
                p.id,
                p.title,
                p.content,
                p.author_id,
                u.username,
                u.email,
                u.password_hash
            FROM posts p
            JOIN users u ON u.id = p.author_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        rows.into_iter()
            .map(|r| -> Result<PostWithAuthor, sqlx::Error> {
                let author_id: i32 = r.try_get("author_id")?;
                Ok(PostWithAuthor {
                    post: Post {
                        id: r.try_get("id")?,
                        title: r.try_get("title")?,
                        content: r.try_get("content")?,
                        author_id,
                    },
                    author: User {
                        id: author_id,
                        username: r.try_get("username")?,
                        email: r.try_get("email")?,
                        password_hash: r.try_get("password_hash")?,
                    },
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbError::from)
    }
}
