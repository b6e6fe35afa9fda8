//! `PostgreSQL` implementation of the `DocumentStore` trait.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::instrument;

use endcredits_core::error::DomainError;
use endcredits_core::repository::DocumentStore;

use crate::schema::CREATE_DOCUMENTS_TABLE;

/// Appends in one statement: a new key gets a one-element array, an
/// existing key has the element concatenated onto its array.
const PUSH_DOCUMENT: &str = r"
INSERT INTO documents (key, value)
VALUES ($1, $2)
ON CONFLICT (key) DO UPDATE
    SET value = documents.value || EXCLUDED.value,
        updated_at = NOW()
";

const GET_DOCUMENT: &str = "SELECT value FROM documents WHERE key = $1";

/// PostgreSQL-backed document store.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Creates a new `PgDocumentStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `documents` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_DOCUMENTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(())
    }
}

fn infrastructure(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    #[instrument(skip(self, value), level = "debug")]
    async fn push(&self, key: &str, value: Value) -> Result<(), DomainError> {
        sqlx::query(PUSH_DOCUMENT)
            .bind(key)
            .bind(Value::Array(vec![value]))
            .execute(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        let row: Option<(Value,)> = sqlx::query_as(GET_DOCUMENT)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(infrastructure)?;
        Ok(row.map(|(value,)| value))
    }
}
