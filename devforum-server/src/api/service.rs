//! Forum operations over an injected session provider

use std::sync::Arc;

use super::types::{CreatePostInput, CreateUserInput, PostView, UserView};
use super::ApiError;
use crate::db::{DbError, SessionProvider};
use crate::models::PostWithAuthor;

/// The forum's operations. Cheap to clone; clones share the provider.
#[derive(Clone)]
pub struct ForumService {
    sessions: Arc<dyn SessionProvider>,
}

impl ForumService {
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        Self { sessions }
    }

    /// All posts with their authors. Empty store yields an empty list.
    pub async fn list_posts(&self) -> Result<Vec<PostView>, ApiError> {
        let mut session = self.sessions.session().await?;
        let posts = session.posts_with_authors().await?;

        tracing::debug!(count = posts.len(), "listed posts");
        Ok(posts.into_iter().map(PostView::from).collect())
    }

    /// Create a user. A taken username is a `Conflict`, not retried.
    pub async fn create_user(&self, input: CreateUserInput) -> Result<UserView, ApiError> {
        let username = input.username.clone();
        let mut session = self.sessions.session().await?;

        let user = session
            .insert_user(input.into())
            .await
            .map_err(|e| match e {
                DbError::UniqueViolation { .. } => ApiError::Conflict {
                    message: format!("username '{}' is already taken", username),
                },
                other => ApiError::from(other),
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "user created");
        Ok(UserView::from(user))
    }

    /// Create a post and resolve its author in the same session.
    ///
    /// An `author_id` with no matching user is reported as `NotFound`.
    pub async fn create_post(&self, input: CreatePostInput) -> Result<PostView, ApiError> {
        let author_id = input.author_id;
        let mut session = self.sessions.session().await?;

        let post = session
            .insert_post(input.into())
            .await
            .map_err(|e| match e {
                DbError::ForeignKeyViolation { .. } => author_not_found(author_id),
                other => ApiError::from(other),
            })?;

        let author = session
            .find_user(post.author_id)
            .await?
            .ok_or_else(|| author_not_found(author_id))?;

        tracing::info!(post_id = post.id, author_id, "post created");
        Ok(PostView::from(PostWithAuthor { post, author }))
    }
}

fn author_not_found(author_id: i32) -> ApiError {
    ApiError::NotFound {
        resource: "author",
        id: author_id.to_string(),
    }
}
