//! CSV serialization of a table.

use crate::table::model::TableModel;

/// Stateless CSV serializer: header row, then data rows, newline-terminated.
///
/// A field containing the delimiter, the quote character, or a newline is
/// quoted, with internal quote characters doubled. Row and column order
/// match the model exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvExporter {
    delimiter: char,
    quote: char,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl CsvExporter {
    /// Exporter with a non-default delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Serialize the whole table.
    #[must_use]
    pub fn export(&self, model: &TableModel) -> String {
        let mut out = String::new();
        self.push_record(&mut out, model.headers());
        for row in model.rows() {
            self.push_record(&mut out, row);
        }
        out
    }

    fn push_record(&self, out: &mut String, fields: &[String]) {
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                out.push(self.delimiter);
            }
            out.push_str(&self.escape(field));
        }
        out.push('\n');
    }

    fn escape(&self, field: &str) -> String {
        let needs_quoting = field.contains(self.delimiter)
            || field.contains(self.quote)
            || field.contains('\n')
            || field.contains('\r');
        if !needs_quoting {
            return field.to_string();
        }

        let doubled: String = field
            .chars()
            .flat_map(|c| {
                if c == self.quote {
                    vec![c, c]
                } else {
                    vec![c]
                }
            })
            .collect();
        format!("{q}{doubled}{q}", q = self.quote)
    }
}
