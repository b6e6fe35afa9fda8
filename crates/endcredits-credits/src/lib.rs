//! End Credits: Credits aggregation.
//!
//! Pure, synchronous list transformations: pad the listed submissions with
//! placeholder credits up to a minimum count, then split the result into
//! the cast, soundtrack and special-thanks sections of the page.

pub mod domain;

pub use domain::aggregation::{CreditEntry, MIN_CREDITS, merge_credits};
pub use domain::sections::{CreditsSections, compose_credits};
