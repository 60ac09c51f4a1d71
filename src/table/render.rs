//! Terminal rendering: wrapped, aligned text from a table model.

use crate::console::adapter::Console;
use crate::table::layout::{ColumnLayout, display_width};
use crate::table::model::TableModel;

/// Renders a [`TableModel`] as wrapped, column-aligned terminal text.
///
/// The renderer holds only presentation knobs; all width math lives in
/// [`ColumnLayout`] and is recomputed per render call.
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    separator: String,
    border: char,
    width: Option<usize>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self {
            separator: " | ".to_string(),
            border: '*',
            width: None,
        }
    }
}

impl TerminalRenderer {
    /// Renderer with the default separator (`" | "`) and border (`*`).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different column separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Use a different title-banner border character.
    #[must_use]
    pub fn with_border(mut self, border: char) -> Self {
        self.border = border;
        self
    }

    /// Pin the target width instead of using the console width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Render against a console's current width.
    #[must_use]
    pub fn render(&self, model: &TableModel, console: &dyn Console) -> String {
        self.render_at(model, self.width.unwrap_or_else(|| console.width()))
    }

    /// Render at an explicit target width.
    #[must_use]
    pub fn render_at(&self, model: &TableModel, target_width: usize) -> String {
        let layout = ColumnLayout::solve(model, target_width, display_width(&self.separator));
        let total = layout.total_width();

        let mut lines = Vec::new();

        if !model.title().is_empty() {
            let border = self.border.to_string().repeat(total);
            lines.push(border.clone());
            lines.push(center(model.title(), total));
            lines.push(border);
        }

        self.emit_block(&mut lines, &layout, model.headers());
        lines.push("-".repeat(total));
        for row in model.rows() {
            self.emit_block(&mut lines, &layout, row);
        }

        lines.join("\n")
    }

    /// Emit one logical row (header or data) as its wrapped physical lines.
    fn emit_block(&self, lines: &mut Vec<String>, layout: &ColumnLayout, cells: &[String]) {
        let wrapped = layout.wrap_row(cells);
        let height = wrapped.first().map_or(0, Vec::len);

        for line_index in 0..height {
            let mut line = String::new();
            for (column, width) in wrapped.iter().zip(layout.widths()) {
                if !line.is_empty() {
                    line.push_str(&self.separator);
                }
                line.push_str(&pad(&column[line_index], *width));
            }
            lines.push(line.trim_end().to_string());
        }
    }
}

/// Left-align `text` in `width` display cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

/// Center `text` in `width` display cells (flush left if it does not fit).
fn center(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(fill / 2))
}
