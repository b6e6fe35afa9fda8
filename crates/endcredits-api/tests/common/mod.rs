//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use endcredits_core::repository::DocumentStore;
use endcredits_test_support::{FixedClock, InMemoryDocumentStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

use endcredits_api::build_app;
use endcredits_api::state::AppState;

/// The front end shipped at the workspace root.
pub fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../public")
}

/// Build the full app router over `document_store` with a fixed clock.
/// Uses the same router as `main.rs`.
pub fn build_test_app(document_store: Arc<dyn DocumentStore>) -> Router {
    let app_state = AppState::new(Arc::new(FixedClock::at_default_instant()), document_store);
    build_app(app_state, public_dir())
}

/// A fresh in-memory store, returned alongside an app that shares it.
pub fn in_memory_app() -> (Arc<InMemoryDocumentStore>, Router) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
