//! End Credits API server entry point.

use std::sync::Arc;

use endcredits_api::config::Config;
use endcredits_api::error::AppError;
use endcredits_api::state::AppState;
use endcredits_core::clock::SystemClock;
use endcredits_docstore::pg_document_store::PgDocumentStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting End Credits API server");

    let config = Config::from_env()?;

    // Create database connection pool and make sure the documents table exists.
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    let document_store = PgDocumentStore::new(pool);
    document_store.ensure_schema().await?;
    tracing::info!("Document store ready");

    let app_state = AppState::new(Arc::new(SystemClock), Arc::new(document_store));
    let app = endcredits_api::build_app(app_state, &config.public_dir);

    let addr = config.socket_addr()?;
    tracing::info!(public_dir = %config.public_dir.display(), "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
