//! Terminal table model, responsive renderer, and CSV/HTML exporters.

pub mod csv;
pub mod html;
pub mod layout;
pub mod model;
pub mod render;

pub use csv::CsvExporter;
pub use html::HtmlExporter;
pub use layout::ColumnLayout;
pub use model::TableModel;
pub use render::TerminalRenderer;
