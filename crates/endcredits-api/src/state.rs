//! Shared application state.

use std::sync::Arc;

use endcredits_core::clock::Clock;
use endcredits_core::repository::DocumentStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock used to stamp new submissions.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Document store holding the submissions array.
    pub document_store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, document_store: Arc<dyn DocumentStore>) -> Self {
        Self {
            clock,
            document_store,
        }
    }
}
