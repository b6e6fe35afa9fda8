//! JSON envelopes shared by the API routes.
//!
//! Store failures are reported in the body's `status` field while the HTTP
//! status stays 200, so the page can always parse the response.

use serde::Serialize;

/// Outcome flag carried by every API response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Body of responses that only carry a message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageBody {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}
