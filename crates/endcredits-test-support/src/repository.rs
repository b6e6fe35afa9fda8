//! Test stores: `DocumentStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use endcredits_core::error::DomainError;
use endcredits_core::repository::DocumentStore;
use serde_json::Value;

/// A document store held in process memory. `push` behaves like the
/// PostgreSQL store: it appends to the array under the key, creating it on
/// first use.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose `key` already holds `value`. Useful for seeding
    /// documents that did not go through `push`.
    #[must_use]
    pub fn with_document(key: &str, value: Value) -> Self {
        let store = Self::default();
        store
            .documents
            .lock()
            .unwrap()
            .insert(key.to_owned(), value);
        store
    }

    /// Returns a snapshot of the value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn document(&self, key: &str) -> Option<Value> {
        self.documents.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn push(&self, key: &str, value: Value) -> Result<(), DomainError> {
        let mut documents = self.documents.lock().unwrap();
        match documents
            .entry(key.to_owned())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(DomainError::CorruptDocument(format!(
                "cannot push onto non-array value under {key}: {other}"
            ))),
        }
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.documents.lock().unwrap().get(key).cloned())
    }
}

/// A document store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn push(&self, _key: &str, _value: Value) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn get(&self, _key: &str) -> Result<Option<Value>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
