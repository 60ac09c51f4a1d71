//! Shared error types for the crate.

pub mod errors;
