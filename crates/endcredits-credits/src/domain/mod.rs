//! Credits domain logic.

pub mod aggregation;
pub mod placeholders;
pub mod sections;
