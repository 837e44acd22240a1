//! Domain records mapped 1:1 to rows
//!
//! No behavior beyond storage and retrieval. The author of a post is
//! resolved through `author_id` at read time.

pub mod post;
pub mod user;

pub use post::{NewPost, Post, PostWithAuthor};
pub use user::{NewUser, User};
