//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The document store could not be reached or rejected the operation.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),

    /// A stored document does not have the expected shape.
    #[error("corrupt document: {0}")]
    CorruptDocument(String),
}
