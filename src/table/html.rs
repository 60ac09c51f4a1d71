//! HTML serialization of a table.

use crate::table::model::TableModel;

/// Stateless HTML serializer producing one `<table>` element.
///
/// Structure: optional `<caption>` when the model has a title, a `<thead>`
/// with one `<th>` row, and a `<tbody>` with one `<td>` row per data row.
/// Structurally significant characters are escaped rather than trusting
/// pre-sanitized input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Serialize the whole table.
    #[must_use]
    pub fn export(self, model: &TableModel) -> String {
        let mut html = vec!["<table>".to_string()];

        if !model.title().is_empty() {
            html.push(format!("<caption>{}</caption>", escape(model.title())));
        }

        html.push("<thead>".to_string());
        html.push(cell_row(model.headers(), "th"));
        html.push("</thead>".to_string());

        html.push("<tbody>".to_string());
        for row in model.rows() {
            html.push(cell_row(row, "td"));
        }
        html.push("</tbody>".to_string());

        html.push("</table>".to_string());
        html.join("\n")
    }
}

fn cell_row(cells: &[String], tag: &str) -> String {
    let mut line = String::from("<tr>");
    for cell in cells {
        line.push_str(&format!("<{tag}>{}</{tag}>", escape(cell)));
    }
    line.push_str("</tr>");
    line
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}
