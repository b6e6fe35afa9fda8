//! Shared test doubles for the End Credits service.

mod clock;
mod repository;

pub use clock::FixedClock;
pub use repository::{FailingDocumentStore, InMemoryDocumentStore};
