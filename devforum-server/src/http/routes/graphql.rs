//! GraphQL endpoint
//!
//! POST runs an operation; GET serves the GraphiQL IDE.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

/// POST /graphql
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema().execute(req.into_inner()).await.into()
}

/// GET /graphql
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn router() -> Router<AppState> {
    Router::new().route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
}
