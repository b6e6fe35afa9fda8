//! Route modules.

pub mod credits;
pub mod health;
pub mod submissions;
