//! Name redaction for visitors who asked to stay anonymous.

use super::submission::Submission;

/// Replaces the display name of hidden submissions.
pub const REDACTED_NAME: &str = "[redacted]";

/// Returns the submission as it may be shown publicly: if `hide` is set the
/// name is replaced with [`REDACTED_NAME`], otherwise it is unchanged.
#[must_use]
pub fn redact(submission: Submission) -> Submission {
    if submission.hide {
        Submission {
            name: Some(REDACTED_NAME.to_owned()),
            ..submission
        }
    } else {
        submission
    }
}
