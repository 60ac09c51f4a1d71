//! Responsive column-width allocation and cell wrapping.
//!
//! A [`ColumnLayout`] is solved per render call from the table contents and
//! a target width; it is never stored on the model. Widths shrink
//! proportionally to each column's natural width when the target is too
//! narrow, flooring at one cell per column so a table always renders
//! something.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::table::model::TableModel;

/// Display width of a string in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Resolved per-column widths for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    widths: Vec<usize>,
    separator_width: usize,
}

impl ColumnLayout {
    /// Solve column widths for `model` against a target total width.
    ///
    /// `separator_width` is the display width of the column separator text.
    #[must_use]
    pub fn solve(model: &TableModel, target_width: usize, separator_width: usize) -> Self {
        let columns = model.column_count();
        let natural = natural_widths(model);

        let overhead = separator_width * (columns - 1);
        // One cell per column minimum, even for degenerate targets.
        let available = target_width.saturating_sub(overhead).max(columns);

        let total: usize = natural.iter().sum();
        let widths = if total <= available {
            natural
        } else {
            shrink_proportionally(&natural, total, available)
        };

        Self {
            widths,
            separator_width,
        }
    }

    /// Assigned width of each column, in column order.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Total rendered width: content plus separators.
    #[must_use]
    pub fn total_width(&self) -> usize {
        let content: usize = self.widths.iter().sum();
        content + self.separator_width * (self.widths.len() - 1)
    }

    /// Wrap one row of cells to the assigned widths and equalize heights.
    ///
    /// Returns one `Vec<String>` of wrapped lines per column; every column
    /// reports the same number of lines, shorter ones padded with empties.
    #[must_use]
    pub fn wrap_row<S: AsRef<str>>(&self, cells: &[S]) -> Vec<Vec<String>> {
        let mut wrapped: Vec<Vec<String>> = cells
            .iter()
            .zip(&self.widths)
            .map(|(cell, &width)| wrap_lines(cell.as_ref(), width))
            .collect();

        let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);
        for column in &mut wrapped {
            column.resize(height, String::new());
        }
        wrapped
    }
}

/// Natural width per column: the widest newline-split line among the header
/// and every cell, floored at one cell.
fn natural_widths(model: &TableModel) -> Vec<usize> {
    let mut widths: Vec<usize> = model
        .headers()
        .iter()
        .map(|h| widest_line(h).max(1))
        .collect();

    for row in model.rows() {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(widest_line(cell));
        }
    }
    widths
}

fn widest_line(text: &str) -> usize {
    text.split('\n')
        .map(|line| display_width(line.trim_end_matches('\r')))
        .max()
        .unwrap_or(0)
}

/// Shrink to `available` cells: proportional floor allocation, minimum one
/// cell each, with rounding drift settled against the widest columns.
fn shrink_proportionally(natural: &[usize], total: usize, available: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = natural
        .iter()
        .map(|&w| (available * w / total).max(1))
        .collect();

    let mut assigned: usize = widths.iter().sum();

    // Leftover cells from flooring go to the naturally widest column.
    if assigned < available {
        let widest = widest_index(natural);
        widths[widest] += available - assigned;
        return widths;
    }

    // The one-cell floors can overshoot on very narrow targets; peel the
    // excess off the currently widest columns without dropping below one.
    while assigned > available {
        let widest = widest_index(&widths);
        if widths[widest] == 1 {
            break;
        }
        widths[widest] -= 1;
        assigned -= 1;
    }
    widths
}

fn widest_index(widths: &[usize]) -> usize {
    let mut index = 0;
    for (i, &w) in widths.iter().enumerate() {
        if w > widths[index] {
            index = i;
        }
    }
    index
}

/// Wrap a cell's full text (embedded newlines are hard breaks) to `width`.
#[must_use]
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for segment in text.split('\n') {
        out.extend(wrap_cell(segment.trim_end_matches('\r'), width));
    }
    out
}

/// Wrap a single newline-free line to `width` display cells.
///
/// Breaks on whitespace, preferring the last break point that fits; a token
/// wider than the column is hard-broken at the width boundary.
#[must_use]
pub fn wrap_cell(segment: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for token in segment.split_whitespace() {
        let token_width = display_width(token);

        if line_width > 0 && line_width + 1 + token_width <= width {
            line.push(' ');
            line.push_str(token);
            line_width += 1 + token_width;
            continue;
        }

        if line_width > 0 {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }

        if token_width <= width {
            line.push_str(token);
            line_width = token_width;
        } else {
            (line, line_width) = hard_break(token, width, &mut lines);
        }
    }

    lines.push(line);
    lines
}

/// Split an oversized token at the width boundary, returning the trailing
/// partial chunk as the new current line.
fn hard_break(token: &str, width: usize, lines: &mut Vec<String>) -> (String, usize) {
    let mut chunk = String::new();
    let mut chunk_width = 0usize;

    for ch in token.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if chunk_width + ch_width > width && !chunk.is_empty() {
            lines.push(std::mem::take(&mut chunk));
            chunk_width = 0;
        }
        chunk.push(ch);
        chunk_width += ch_width;
    }
    (chunk, chunk_width)
}
