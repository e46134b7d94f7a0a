//! Shared helpers for API integration tests.

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use scrawl_api::config::{ServerConfig, StoreBackend};
use scrawl_api::router::build_app_router;
use scrawl_api::state::AppState;
use scrawl_core::repository::NoteRepository;
use scrawl_core::usecase::NoteUseCases;
use scrawl_store::MemoryNoteRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
    }
}

/// Build the full application router over a fresh in-memory repository.
///
/// Mirrors the wiring in `main.rs` so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) that
/// production uses.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(MemoryNoteRepo::new()))
}

/// Build the application router over an explicit repository.
pub fn build_test_app_with(repo: Arc<dyn NoteRepository>) -> Router {
    let config = test_config();
    let state = AppState {
        notes: Arc::new(NoteUseCases::new(repo)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the raw response body.
pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect and parse the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
