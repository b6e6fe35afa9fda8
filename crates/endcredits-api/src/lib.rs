//! End Credits: HTTP API.
//!
//! Exposes the submission routes, the composed credits page and the static
//! front end from a single axum router.

pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router. Anything not matched by an API route
/// is looked up in `public_dir`.
pub fn build_app(app_state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::submissions::router())
        .merge(routes::credits::router())
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
