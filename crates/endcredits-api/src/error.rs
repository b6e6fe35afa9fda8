//! End Credits: API error types.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::response::{IntoResponse, Response};
use endcredits_core::error::DomainError;
use thiserror::Error;

use crate::envelope::MessageBody;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The document store could not be prepared.
    #[error("document store error: {0}")]
    Store(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Request errors raised before a handler runs. Store failures never become
/// an `ApiError`; the routes turn those into 200 responses themselves.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not valid JSON, or was a JSON scalar.
    MalformedBody(JsonRejection),
    /// The query string did not decode.
    MalformedQuery(QueryRejection),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::MalformedQuery(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedBody(rejection) => (
                rejection.status(),
                Json(MessageBody::error(rejection.body_text())),
            )
                .into_response(),
            Self::MalformedQuery(rejection) => (
                rejection.status(),
                Json(MessageBody::error(rejection.body_text())),
            )
                .into_response(),
        }
    }
}
