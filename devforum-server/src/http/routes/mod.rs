//! Route handlers organized by resource

pub mod graphql;
pub mod health;
pub mod root;
