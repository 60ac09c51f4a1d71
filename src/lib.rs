#![forbid(unsafe_code)]

//! clirail — building blocks for command-line scripts.
//!
//! Two halves:
//! 1. **Run harness** — wraps a user-defined routine with timing, outcome
//!    classification, lifecycle hooks, and exit-code derivation
//! 2. **Terminal tables** — responsive column layout and wrapping against a
//!    terminal width, with CSV/HTML export of the same data
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use clirail::prelude::*;
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use clirail::app::runner::Runner;
//! use clirail::table::model::TableModel;
//! ```

pub mod prelude;

pub mod app;
pub mod console;
pub mod core;
pub mod table;
