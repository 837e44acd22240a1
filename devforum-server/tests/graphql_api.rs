//! End-to-end tests through the HTTP router against the in-memory store
//! and against stores that fail or stall

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use devforum_server::db::{DbError, MemorySessions, Session, SessionProvider};
use devforum_server::http::{build_router, ServerConfig};
use devforum_server::AppState;

fn app() -> Router {
    app_with(Arc::new(MemorySessions::new()), &ServerConfig::default())
}

/// Store that never hands out a session: the pool is exhausted and pings fail.
struct ExhaustedSessions;

#[async_trait]
impl SessionProvider for ExhaustedSessions {
    async fn session(&self) -> Result<Box<dyn Session>, DbError> {
        Err(DbError::PoolExhausted)
    }

    async fn ping(&self) -> Result<(), DbError> {
        Err(DbError::Unavailable("connection refused".into()))
    }
}

/// Store that takes far longer than any request timeout to hand out a session.
struct StalledSessions;

#[async_trait]
impl SessionProvider for StalledSessions {
    async fn session(&self) -> Result<Box<dyn Session>, DbError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Err(DbError::PoolExhausted)
    }

    async fn ping(&self) -> Result<(), DbError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    }
}

fn app_with(sessions: Arc<dyn SessionProvider>, config: &ServerConfig) -> Router {
    build_router(AppState::new(sessions), config)
}

fn graphql_request(query: &str, variables: Value) -> Request<Body> {
    let payload = json!({ "query": query, "variables": variables });
    Request::builder()
        .method("POST")
        .uri("/graphql")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn graphql(app: &Router, query: &str, variables: Value) -> Value {
    let response = app
        .clone()
        .oneshot(graphql_request(query, variables))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

const CREATE_USER: &str = r#"
    mutation CreateUser($input: CreateUserInput!) {
        createUser(input: $input) { id username email }
    }
"#;

const CREATE_POST: &str = r#"
    mutation CreatePost($input: CreatePostInput!) {
        createPost(input: $input) { id title content author { id username email } }
    }
"#;

const GET_POSTS: &str = "query { getPosts { id title content author { id username email } } }";

async fn create_user(app: &Router, username: &str) -> Value {
    let response = graphql(
        app,
        CREATE_USER,
        json!({ "input": {
            "username": username,
            "email": format!("{}@x.com", username),
            "passwordHash": "h"
        }}),
    )
    .await;
    response["data"]["createUser"].clone()
}

#[tokio::test]
async fn root_returns_welcome() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Welcome to DevForum" })
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn graphiql_served_on_get() {
    let response = app()
        .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));
}

#[tokio::test]
async fn forum_round_trip() {
    let app = app();

    let alice = create_user(&app, "alice").await;
    assert_eq!(
        alice,
        json!({ "id": 1, "username": "alice", "email": "alice@x.com" })
    );

    let created = graphql(
        &app,
        CREATE_POST,
        json!({ "input": { "title": "Hi", "content": "Hello", "authorId": 1 } }),
    )
    .await;
    let post = &created["data"]["createPost"];
    assert_eq!(post["id"], 1);
    assert_eq!(post["author"], alice);

    let listed = graphql(&app, GET_POSTS, json!({})).await;
    assert_eq!(listed["data"]["getPosts"], json!([post]));
}

#[tokio::test]
async fn empty_forum_lists_nothing() {
    let listed = graphql(&app(), GET_POSTS, json!({})).await;

    assert_eq!(listed["data"]["getPosts"], json!([]));
    assert!(listed.get("errors").is_none());
}

#[tokio::test]
async fn lists_every_post_with_its_author() {
    let app = app();
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;

    let authors = [&alice, &bob, &bob, &alice];
    for (i, author) in authors.iter().enumerate() {
        graphql(
            &app,
            CREATE_POST,
            json!({ "input": {
                "title": format!("post {}", i),
                "content": "body",
                "authorId": author["id"]
            }}),
        )
        .await;
    }

    let listed = graphql(&app, GET_POSTS, json!({})).await;
    let posts = listed["data"]["getPosts"].as_array().unwrap();
    assert_eq!(posts.len(), authors.len());
    for (post, author) in posts.iter().zip(authors) {
        assert_eq!(&post["author"], author);
    }
}

#[tokio::test]
async fn duplicate_username_is_conflict() {
    let app = app();
    create_user(&app, "alice").await;

    let response = graphql(
        &app,
        CREATE_USER,
        json!({ "input": { "username": "alice", "email": "other@x.com", "passwordHash": "h" } }),
    )
    .await;

    assert_eq!(response["data"], Value::Null);
    assert_eq!(response["errors"][0]["extensions"]["code"], "CONFLICT");
}

#[tokio::test]
async fn unknown_author_is_not_found() {
    let response = graphql(
        &app(),
        CREATE_POST,
        json!({ "input": { "title": "Hi", "content": "Hello", "authorId": 7 } }),
    )
    .await;

    assert_eq!(response["data"], Value::Null);
    assert_eq!(response["errors"][0]["message"], "author '7' not found");
    assert_eq!(response["errors"][0]["extensions"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn health_reports_unavailable_store() {
    let app = app_with(Arc::new(ExhaustedSessions), &ServerConfig::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["status"], "unavailable");
}

#[tokio::test]
async fn exhausted_pool_is_service_unavailable() {
    let app = app_with(Arc::new(ExhaustedSessions), &ServerConfig::default());

    let response = graphql(&app, GET_POSTS, json!({})).await;

    assert_eq!(response["data"], Value::Null);
    assert_eq!(
        response["errors"][0]["extensions"]["code"],
        "SERVICE_UNAVAILABLE"
    );
}

#[tokio::test]
async fn stalled_request_times_out() {
    let config = ServerConfig {
        request_timeout: Duration::from_millis(50),
        ..ServerConfig::default()
    };
    let app = app_with(Arc::new(StalledSessions), &config);

    let response = app
        .oneshot(graphql_request(GET_POSTS, json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}
