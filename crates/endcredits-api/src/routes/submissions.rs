//! Routes for the Submissions context.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Serialize;
use tracing::{error, info, instrument};
use uuid::Uuid;

use endcredits_submissions::application::{command_handlers, query_handlers};
use endcredits_submissions::domain::commands::SubmitCredit;
use endcredits_submissions::domain::submission::{NewSubmission, Submission};

use crate::envelope::{MessageBody, ResponseStatus};
use crate::error::ApiError;
use crate::state::AppState;

const SUBMIT_OK_MESSAGE: &str = "Submission received!";
const SUBMIT_FAILED_MESSAGE: &str = "Failed to save submission";

/// Response body for GET /submissions.
#[derive(Debug, Serialize)]
pub struct SubmissionsResponse {
    pub status: ResponseStatus,
    pub data: Vec<Submission>,
}

/// POST /submit
///
/// A body sent without a JSON content type is not parsed and is saved as a
/// submission with every field absent.
#[instrument(skip(state, payload))]
async fn submit(
    State(state): State<AppState>,
    payload: Result<Json<NewSubmission>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(JsonRejection::MissingJsonContentType(_)) => NewSubmission::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let command = SubmitCredit {
        correlation_id: Uuid::new_v4(),
        submission,
    };

    info!(correlation_id = %command.correlation_id, "handling submit_credit command");

    let result = command_handlers::handle_submit_credit(
        &command,
        state.clock.as_ref(),
        state.document_store.as_ref(),
    )
    .await;

    match result {
        Ok(saved) => {
            info!(
                correlation_id = %command.correlation_id,
                hidden = saved.hide,
                timestamp = %saved.timestamp,
                "submission saved"
            );
            Ok(Json(MessageBody::success(SUBMIT_OK_MESSAGE)))
        }
        Err(err) => {
            error!(correlation_id = %command.correlation_id, error = %err, "failed to save submission");
            Ok(Json(MessageBody::error(SUBMIT_FAILED_MESSAGE)))
        }
    }
}

/// GET /submissions
///
/// A store failure is reported as `status: "error"` with an empty `data`
/// array; the caller never sees a transport-level error.
#[instrument(skip(state))]
async fn list(State(state): State<AppState>) -> Json<SubmissionsResponse> {
    match query_handlers::list_submissions(state.document_store.as_ref()).await {
        Ok(data) => Json(SubmissionsResponse {
            status: ResponseStatus::Success,
            data,
        }),
        Err(err) => {
            error!(error = %err, "failed to load submissions");
            Json(SubmissionsResponse {
                status: ResponseStatus::Error,
                data: Vec::new(),
            })
        }
    }
}

/// Returns the router for the submissions context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit))
        .route("/submissions", get(list))
}
