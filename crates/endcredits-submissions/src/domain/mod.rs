//! Domain types and pure rules for submissions.

pub mod commands;
pub mod redaction;
pub mod submission;
