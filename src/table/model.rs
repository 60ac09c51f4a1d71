//! In-memory tabular data: title, fixed headers, appended rows.

use std::fmt;

use crate::core::errors::{RailError, Result};
use crate::table::csv::CsvExporter;
use crate::table::html::HtmlExporter;
use crate::table::render::TerminalRenderer;

/// A titled table with a fixed set of ordered columns.
///
/// Rows are validated against the header count at append time; a mismatch
/// is rejected immediately and leaves the table unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Build a table with a title (may be empty) and at least one header.
    pub fn new<I, S>(title: impl Into<String>, headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if headers.is_empty() {
            return Err(RailError::EmptyHeaders);
        }
        Ok(Self {
            title: title.into(),
            headers,
            rows: Vec::new(),
        })
    }

    /// Append one row; the cell count must match the header count exactly.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let row: Vec<String> = cells.into_iter().map(|c| c.to_string()).collect();
        if row.len() != self.headers.len() {
            return Err(RailError::RowArity {
                expected: self.headers.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Table title; empty string means untitled.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ordered column headers.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Appended rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns (always ≥ 1).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render as terminal text at the given target width, with the default
    /// separator and border characters.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        TerminalRenderer::new().render_at(self, width)
    }

    /// Export as CSV with the default delimiter and quoting.
    #[must_use]
    pub fn to_csv(&self) -> String {
        CsvExporter::default().export(self)
    }

    /// Export as a single HTML `<table>`.
    #[must_use]
    pub fn to_html(&self) -> String {
        HtmlExporter.export(self)
    }
}

impl fmt::Display for TableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} rows)", self.title, self.rows.len())
    }
}
