//! Application execution harness: outcome classification, lifecycle hooks,
//! and exit-code derivation around one synchronous run.

pub mod context;
pub mod runner;

pub use context::{ExecutionContext, Observables, Outcome, ReturnValue};
pub use runner::{Application, RaisedPolicy, RunReport, Runner};
