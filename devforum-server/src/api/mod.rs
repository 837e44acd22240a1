//! API layer - the forum's query and mutations
//!
//! [`ForumService`] does the work: one session per operation, domain records
//! mapped to views. The GraphQL roots in [`schema`] are thin wrappers that
//! turn [`ApiError`] into GraphQL errors with an `extensions.code`.

pub mod error;
pub mod schema;
pub mod service;
pub mod types;

pub use error::ApiError;
pub use schema::{build_schema, ForumSchema, MutationRoot, QueryRoot};
pub use service::ForumService;
pub use types::{CreatePostInput, CreateUserInput, PostView, UserView};
