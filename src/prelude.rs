//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use clirail::prelude::*;
//! ```

// Core
pub use crate::core::errors::{RailError, Result, RoutineError};

// Console
pub use crate::console::adapter::{Console, StaticConsole, SystemConsole};
pub use crate::console::panel::Panel;
pub use crate::console::rule::Rule;

// Application harness
pub use crate::app::context::{ExecutionContext, Observables, Outcome, ReturnValue};
pub use crate::app::runner::{Application, RaisedPolicy, RunReport, Runner};

// Tables
pub use crate::table::csv::CsvExporter;
pub use crate::table::html::HtmlExporter;
pub use crate::table::layout::ColumnLayout;
pub use crate::table::model::TableModel;
pub use crate::table::render::TerminalRenderer;
