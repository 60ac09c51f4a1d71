//! Bordered text panel, used by the harness to frame a raised error.

use colored::Colorize;

use crate::console::adapter::Console;
use crate::table::layout::wrap_cell;

/// Horizontal space consumed by `| ` and ` |` on a panel line.
const FRAME_OVERHEAD: usize = 4;

/// A box-bordered block of text with an optional title in the top border.
#[derive(Debug, Clone)]
pub struct Panel {
    title: Option<String>,
    body: String,
    width: Option<usize>,
}

impl Panel {
    /// Panel around the given body text.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
            width: None,
        }
    }

    /// Put a title into the top border.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Pin the rendered width instead of using the console width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Render against a console; red borders when colors are allowed.
    #[must_use]
    pub fn render(&self, console: &dyn Console) -> String {
        let width = self.width.unwrap_or_else(|| console.width());
        let plain = self.render_plain(width);
        if console.colors_enabled() {
            plain
                .lines()
                .map(|l| l.red().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            plain
        }
    }

    /// Render without any color escapes.
    #[must_use]
    pub fn render_plain(&self, width: usize) -> String {
        let width = width.max(FRAME_OVERHEAD + 1);
        let inner = width - FRAME_OVERHEAD;

        let mut lines = vec![self.top_border(width)];
        for raw in self.body.split('\n') {
            for wrapped in wrap_cell(raw, inner) {
                lines.push(format!("| {wrapped:<inner$} |"));
            }
        }
        lines.push(format!("+{}+", "-".repeat(width - 2)));
        lines.join("\n")
    }

    fn top_border(&self, width: usize) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => {
                let mut line: String = format!("+- {title} ").chars().take(width - 1).collect();
                while line.chars().count() < width - 1 {
                    line.push('-');
                }
                line.push('+');
                line
            }
            _ => format!("+{}+", "-".repeat(width - 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::adapter::StaticConsole;

    #[test]
    fn panel_frames_the_body() {
        let panel = Panel::new("boom").with_width(12);
        let text = panel.render_plain(12);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"+----------+"));
        assert_eq!(lines.last(), Some(&"+----------+"));
        assert!(lines.contains(&"| boom     |"), "got {lines:?}");
    }

    #[test]
    fn title_lands_in_the_top_border() {
        let panel = Panel::new("x").with_title("Application Error");
        let text = panel.render_plain(40);
        assert!(text.starts_with("+- Application Error "), "got {text}");
    }

    #[test]
    fn long_body_wraps_inside_the_frame() {
        let panel = Panel::new("one two three four five six seven eight");
        let text = panel.render_plain(16);
        for line in text.lines() {
            assert!(line.len() <= 16, "line too wide: {line:?}");
        }
    }

    #[test]
    fn colored_console_wraps_lines_in_escapes() {
        let console = StaticConsole::interactive(20);
        let text = Panel::new("oops").render(&console);
        assert!(text.contains('\x1b'));
    }
}
