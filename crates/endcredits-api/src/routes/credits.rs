//! Routes for the composed credits page.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

use endcredits_credits::domain::sections::CREDITS_TITLE;
use endcredits_credits::{CreditsSections, compose_credits};
use endcredits_submissions::application::query_handlers;

use crate::envelope::ResponseStatus;
use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /credits.
#[derive(Debug, Default, Deserialize)]
pub struct CreditsQuery {
    /// Set once the visitor has submitted a credit; adds the playlist.
    #[serde(default)]
    pub submitted: bool,
}

/// Response body for GET /credits.
#[derive(Debug, Serialize)]
pub struct CreditsResponse {
    pub status: ResponseStatus,
    pub title: &'static str,
    #[serde(flatten)]
    pub sections: CreditsSections,
}

/// GET /credits
///
/// If the submissions cannot be read the page is composed from placeholders
/// alone and `status` is `"error"`.
#[instrument(skip(state, query))]
async fn credits(
    State(state): State<AppState>,
    query: Result<Query<CreditsQuery>, QueryRejection>,
) -> Result<Json<CreditsResponse>, ApiError> {
    let Query(query) = query?;
    let (status, submissions) =
        match query_handlers::list_submissions(state.document_store.as_ref()).await {
            Ok(submissions) => (ResponseStatus::Success, submissions),
            Err(err) => {
                error!(error = %err, "failed to load submissions for credits");
                (ResponseStatus::Error, Vec::new())
            }
        };

    Ok(Json(CreditsResponse {
        status,
        title: CREDITS_TITLE,
        sections: compose_credits(&submissions, query.submitted),
    }))
}

/// Returns the router for the credits page.
pub fn router() -> Router<AppState> {
    Router::new().route("/credits", get(credits))
}
