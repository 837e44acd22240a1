//! Request and response types for each operation

use async_graphql::{InputObject, SimpleObject};

use crate::models::{NewPost, NewUser, PostWithAuthor, User};

/// Public projection of a user (no password hash)
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "UserType")]
pub struct UserView {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

/// Post with its author nested
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "PostType")]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: UserView,
}

impl From<PostWithAuthor> for PostView {
    fn from(p: PostWithAuthor) -> Self {
        Self {
            id: p.post.id,
            title: p.post.title,
            content: p.post.content,
            author: UserView::from(p.author),
        }
    }
}

/// `createUser` input
#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    /// Stored as given; hashing is the client's job.
    pub password_hash: String,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
            password_hash: input.password_hash,
        }
    }
}

/// `createPost` input
#[derive(Debug, Clone, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub author_id: i32,
}

impl From<CreatePostInput> for NewPost {
    fn from(input: CreatePostInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            author_id: input.author_id,
        }
    }
}
