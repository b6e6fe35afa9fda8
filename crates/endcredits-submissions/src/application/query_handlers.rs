//! Query handlers for the Submissions context.
//!
//! This module loads the stored collection and returns it in the form that
//! may be shown publicly.

use endcredits_core::error::DomainError;
use endcredits_core::repository::DocumentStore;
use serde_json::Value;
use tracing::warn;

use crate::domain::redaction::redact;
use crate::domain::submission::{SUBMISSIONS_KEY, Submission};

/// Lists every stored submission in insertion order, with hidden names
/// redacted. A collection that was never written is empty. Elements that
/// do not decode as a submission are logged and left out.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store read fails.
/// Returns `DomainError::CorruptDocument` if the stored value is not an
/// array.
pub async fn list_submissions(store: &dyn DocumentStore) -> Result<Vec<Submission>, DomainError> {
    let document = store.get(SUBMISSIONS_KEY).await?;
    let submissions = decode_submissions(document.unwrap_or(Value::Null))?;
    Ok(submissions.into_iter().map(redact).collect())
}

fn decode_submissions(document: Value) -> Result<Vec<Submission>, DomainError> {
    match document {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(submission) => Some(submission),
                Err(e) => {
                    warn!(index, error = %e, "skipping undecodable submission");
                    None
                }
            })
            .collect()),
        other => Err(DomainError::CorruptDocument(format!(
            "expected an array under {SUBMISSIONS_KEY}, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use endcredits_core::error::DomainError;
    use endcredits_test_support::{FailingDocumentStore, InMemoryDocumentStore};
    use serde_json::json;

    use super::*;
    use crate::domain::redaction::REDACTED_NAME;

    fn seeded(documents: Value) -> InMemoryDocumentStore {
        InMemoryDocumentStore::with_document(SUBMISSIONS_KEY, documents)
    }

    #[tokio::test]
    async fn test_list_returns_empty_when_nothing_stored() {
        // Arrange
        let store = InMemoryDocumentStore::new();

        // Act
        let submissions = list_submissions(&store).await.unwrap();

        // Assert
        assert!(submissions.is_empty());
    }

    #[tokio::test]
    async fn test_list_treats_null_document_as_empty() {
        let store = seeded(Value::Null);

        let submissions = list_submissions(&store).await.unwrap();

        assert!(submissions.is_empty());
    }

    #[tokio::test]
    async fn test_list_redacts_hidden_names_in_insertion_order() {
        // Arrange
        let store = seeded(json!([
            { "name": "Ada", "role": "Lead", "hide": false, "timestamp": "2026-01-15T10:00:00Z" },
            { "name": "Grace", "role": "Support", "hide": true, "timestamp": "2026-01-15T10:01:00Z" },
            { "name": "Linus", "role": "Extra", "timestamp": "2026-01-15T10:02:00Z" }
        ]));

        // Act
        let submissions = list_submissions(&store).await.unwrap();

        // Assert
        let names: Vec<Option<&str>> = submissions.iter().map(|s| s.name.as_deref()).collect();
        assert_eq!(names, [Some("Ada"), Some(REDACTED_NAME), Some("Linus")]);
        let roles: Vec<Option<&str>> = submissions.iter().map(|s| s.role.as_deref()).collect();
        assert_eq!(roles, [Some("Lead"), Some("Support"), Some("Extra")]);
    }

    #[tokio::test]
    async fn test_list_does_not_modify_stored_names() {
        // Arrange
        let store = seeded(json!([
            { "name": "Grace", "hide": true, "timestamp": "2026-01-15T10:01:00Z" }
        ]));

        // Act
        list_submissions(&store).await.unwrap();

        // Assert
        assert_eq!(store.document(SUBMISSIONS_KEY).unwrap()[0]["name"], "Grace");
    }

    #[tokio::test]
    async fn test_repeated_lists_are_identical() {
        let store = seeded(json!([
            { "name": "Ada", "hide": true, "timestamp": "2026-01-15T10:00:00Z" },
            { "name": "Grace", "timestamp": "2026-01-15T10:01:00Z" }
        ]));

        let first = list_submissions(&store).await.unwrap();
        let second = list_submissions(&store).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_returns_infrastructure_error_when_store_fails() {
        let result = list_submissions(&FailingDocumentStore).await;

        match result.unwrap_err() {
            DomainError::Infrastructure(_) => {}
            other => panic!("expected Infrastructure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_rejects_non_array_document() {
        let store = seeded(json!({ "name": "Ada" }));

        let result = list_submissions(&store).await;

        match result.unwrap_err() {
            DomainError::CorruptDocument(_) => {}
            other => panic!("expected CorruptDocument, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_skips_undecodable_entries_and_keeps_the_rest() {
        // Arrange
        let store = seeded(json!([
            { "name": "Ada" },
            { "name": "Grace", "timestamp": "2026-01-15T10:01:00Z" },
            "not a submission",
            { "name": "Linus", "timestamp": "2026-01-15T10:02:00Z" }
        ]));

        // Act
        let submissions = list_submissions(&store).await.unwrap();

        // Assert
        let names: Vec<Option<&str>> = submissions.iter().map(|s| s.name.as_deref()).collect();
        assert_eq!(names, [Some("Grace"), Some("Linus")]);
    }
}
