//! Terminal capability detection plus the decorative console components
//! (rule, panel) the run harness prints around a script's own output.

pub mod adapter;
pub mod panel;
pub mod rule;

pub use adapter::{Console, StaticConsole, SystemConsole};
pub use panel::Panel;
pub use rule::Rule;
