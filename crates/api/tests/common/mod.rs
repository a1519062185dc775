#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use movies_api::config::ServerConfig;
use movies_api::router::build_app_router;
use movies_api::state::AppState;
use movies_db::{MemoryMovieStore, MovieStore, PgMovieStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        run_migrations: false,
    }
}

/// Build the full application router around an arbitrary store.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack (CORS, request ID, tracing, panic recovery).
pub fn build_app_with_store(store: Arc<dyn MovieStore>) -> Router {
    build_app_router(AppState {
        store,
        config: Arc::new(test_config()),
    })
}

/// Router backed by a fresh in-memory store. Returns the store too so tests
/// can share it across several `oneshot` calls.
pub fn build_memory_app() -> (Router, Arc<MemoryMovieStore>) {
    let store = Arc::new(MemoryMovieStore::new());
    (build_app_with_store(store.clone()), store)
}

/// Router backed by Postgres, for `#[sqlx::test]` tests.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_store(Arc::new(PgMovieStore::new(pool)))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw body with a JSON content type, for malformed-payload tests.
pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
