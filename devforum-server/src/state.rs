//! Application state shared across handlers

use std::sync::Arc;

use crate::api::{build_schema, ForumSchema, ForumService};
use crate::db::SessionProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    schema: ForumSchema,
    sessions: Arc<dyn SessionProvider>,
}

impl AppState {
    /// Wire the GraphQL schema to a session provider.
    pub fn new(sessions: Arc<dyn SessionProvider>) -> Self {
        let schema = build_schema(ForumService::new(sessions.clone()));
        Self {
            inner: Arc::new(AppStateInner { schema, sessions }),
        }
    }

    pub fn schema(&self) -> &ForumSchema {
        &self.inner.schema
    }

    pub fn sessions(&self) -> &Arc<dyn SessionProvider> {
        &self.inner.sessions
    }
}
