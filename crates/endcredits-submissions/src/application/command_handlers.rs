//! Command handlers for the Submissions context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: stamp the input, serialize it, push it to the
//! document store.

use endcredits_core::clock::Clock;
use endcredits_core::command::Command;
use endcredits_core::error::DomainError;
use endcredits_core::repository::DocumentStore;
use tracing::debug;

use crate::domain::commands::SubmitCredit;
use crate::domain::submission::{SUBMISSIONS_KEY, Submission};

/// Handles the `SubmitCredit` command: assigns the server timestamp and
/// appends the record to the end of the stored collection.
///
/// The store write is attempted once; a failure is returned to the caller
/// and not retried.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if serialization or the store
/// write fails.
pub async fn handle_submit_credit(
    command: &SubmitCredit,
    clock: &dyn Clock,
    store: &dyn DocumentStore,
) -> Result<Submission, DomainError> {
    let submission = Submission::stamp(command.submission.clone(), clock.now());

    let document = serde_json::to_value(&submission).map_err(|e| {
        DomainError::Infrastructure(format!("submission serialization failed: {e}"))
    })?;

    debug!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        "pushing submission"
    );
    store.push(SUBMISSIONS_KEY, document).await?;

    Ok(submission)
}
