//! End Credits: PostgreSQL document store.
//!
//! Persists JSON documents in a single key/value table. The submissions
//! service keeps all records as one growing array under one key.

pub mod pg_document_store;
pub mod schema;
