//! Integration tests for `PgDocumentStore`.
//!
//! These need a PostgreSQL server reachable through `DATABASE_URL`; run
//! them with `cargo test -- --ignored`.

use endcredits_core::repository::DocumentStore;
use endcredits_docstore::pg_document_store::PgDocumentStore;
use serde_json::json;
use sqlx::PgPool;

async fn store(pool: PgPool) -> PgDocumentStore {
    let store = PgDocumentStore::new(pool);
    store.ensure_schema().await.unwrap();
    store
}

// --- get ---

#[sqlx::test(migrations = false)]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_get_returns_none_for_unknown_key(pool: PgPool) {
    let store = store(pool).await;

    let value = store.get("submissions").await.unwrap();

    assert!(value.is_none());
}

// --- push + get round-trip ---

#[sqlx::test(migrations = false)]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_push_creates_single_element_array(pool: PgPool) {
    let store = store(pool).await;

    store
        .push("submissions", json!({ "name": "Ada", "role": "Lead" }))
        .await
        .unwrap();

    let value = store.get("submissions").await.unwrap().unwrap();
    assert_eq!(value, json!([{ "name": "Ada", "role": "Lead" }]));
}

// --- ordering ---

#[sqlx::test(migrations = false)]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_push_appends_in_insertion_order(pool: PgPool) {
    let store = store(pool).await;

    for n in 1..=3 {
        store.push("submissions", json!({ "n": n })).await.unwrap();
    }

    let value = store.get("submissions").await.unwrap().unwrap();
    assert_eq!(value, json!([{ "n": 1 }, { "n": 2 }, { "n": 3 }]));
}

// --- isolation ---

#[sqlx::test(migrations = false)]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_keys_are_independent(pool: PgPool) {
    let store = store(pool).await;

    store.push("submissions", json!("a")).await.unwrap();
    store.push("other", json!("b")).await.unwrap();

    assert_eq!(
        store.get("submissions").await.unwrap().unwrap(),
        json!(["a"])
    );
    assert_eq!(store.get("other").await.unwrap().unwrap(), json!(["b"]));
}

#[sqlx::test(migrations = false)]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    let store = store(pool).await;

    store.ensure_schema().await.unwrap();
}
