//! Shared abstractions for the End Credits service.
//!
//! This crate defines the traits and types the other crates depend on:
//! time, errors, commands and the document store seam. It contains no
//! infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod repository;
