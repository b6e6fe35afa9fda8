//! End Credits: Submissions bounded context.
//!
//! Responsible for accepting visitor credit entries, appending them to the
//! document store, and listing them back with hidden names redacted.

pub mod application;
pub mod domain;
