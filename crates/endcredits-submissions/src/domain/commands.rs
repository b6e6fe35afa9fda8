//! Commands for the Submissions context.

use endcredits_core::command::Command;
use uuid::Uuid;

use super::submission::NewSubmission;

/// Command to append a visitor's credit to the collection.
#[derive(Debug, Clone)]
pub struct SubmitCredit {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// What the visitor posted.
    pub submission: NewSubmission,
}

impl Command for SubmitCredit {
    fn command_type(&self) -> &'static str {
        "submissions.submit_credit"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
