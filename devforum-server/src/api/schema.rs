//! GraphQL roots
//!
//! Field names follow GraphQL convention (`getPosts`, `createUser`,
//! `createPost`, `passwordHash`, `authorId`).

use async_graphql::{EmptySubscription, ErrorExtensions, Object, Schema};

use super::types::{CreatePostInput, CreateUserInput, PostView, UserView};
use super::ForumService;

pub type ForumSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the service injected into both roots.
pub fn build_schema(service: ForumService) -> ForumSchema {
    Schema::build(
        QueryRoot {
            service: service.clone(),
        },
        MutationRoot { service },
        EmptySubscription,
    )
    .finish()
}

pub struct QueryRoot {
    service: ForumService,
}

#[Object]
impl QueryRoot {
    /// Every post with its author.
    async fn get_posts(&self) -> async_graphql::Result<Vec<PostView>> {
        self.service.list_posts().await.map_err(|e| e.extend())
    }
}

pub struct MutationRoot {
    service: ForumService,
}

#[Object]
impl MutationRoot {
    /// Register a user.
    async fn create_user(&self, input: CreateUserInput) -> async_graphql::Result<UserView> {
        self.service.create_user(input).await.map_err(|e| e.extend())
    }

    /// Publish a post on behalf of an existing user.
    async fn create_post(&self, input: CreatePostInput) -> async_graphql::Result<PostView> {
        self.service.create_post(input).await.map_err(|e| e.extend())
    }
}
