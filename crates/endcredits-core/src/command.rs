//! Command abstractions.

use uuid::Uuid;

/// A write request handled by one of the application services.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted name used in log records, e.g. `submissions.submit_credit`.
    fn command_type(&self) -> &'static str;

    /// Identifier tying the command to the log lines it produces.
    fn correlation_id(&self) -> Uuid;
}
