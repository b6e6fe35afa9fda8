//! Document store abstraction.
//!
//! The store maps a string key to a JSON value. Values written with `push`
//! are arrays that only ever grow; nothing here updates or removes an
//! element once it has been pushed.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::DomainError;

/// Repository trait for a key/value document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append `value` to the end of the array stored under `key`, creating
    /// the array if the key does not exist yet.
    async fn push(&self, key: &str, value: Value) -> Result<(), DomainError>;

    /// Load the value stored under `key`, or `None` if nothing was ever
    /// written there.
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError>;
}
