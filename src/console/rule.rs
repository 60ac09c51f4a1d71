//! Horizontal rule: the divider/banner printed around an application run.

use colored::Colorize;

use crate::console::adapter::Console;
use crate::table::layout::display_width;

/// Placeholder substituted with the application title in custom patterns.
pub const TITLE_SLOT: &str = "{title}";

/// Spaces around a centered title in the default pattern.
const TITLE_PADDING: usize = 2;

/// A full-width horizontal line, optionally carrying a centered title.
///
/// The default rendering fills the target width with a repeated character
/// and centers the title in it. A custom pattern replaces the whole line:
/// every occurrence of `{title}` is substituted and the result is printed
/// verbatim, without width filling.
#[derive(Debug, Clone)]
pub struct Rule {
    title: Option<String>,
    fill: char,
    pattern: Option<String>,
    width: Option<usize>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            title: None,
            fill: '-',
            pattern: None,
            width: None,
        }
    }
}

impl Rule {
    /// Untitled full-width rule with the default `-` fill.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Center the given title in the rule.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Use a different fill character.
    #[must_use]
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    /// Replace the default rendering with a literal pattern containing
    /// [`TITLE_SLOT`].
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Pin the rendered width instead of using the console width.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Render the rule against a console, coloring when the console allows.
    #[must_use]
    pub fn render(&self, console: &dyn Console) -> String {
        let width = self.width.unwrap_or_else(|| console.width());
        let line = self.render_plain(width);
        if console.colors_enabled() {
            line.cyan().to_string()
        } else {
            line
        }
    }

    /// Render without any color escapes.
    #[must_use]
    pub fn render_plain(&self, width: usize) -> String {
        if let Some(pattern) = &self.pattern {
            return pattern.replace(TITLE_SLOT, self.title.as_deref().unwrap_or(""));
        }

        match self.title.as_deref() {
            Some(title) if !title.is_empty() => self.centered(title, width),
            _ => self.fill.to_string().repeat(width),
        }
    }

    fn centered(&self, title: &str, width: usize) -> String {
        let banner_width = display_width(title) + TITLE_PADDING * 2;
        let side = width.saturating_sub(banner_width) / 2;
        let pad = " ".repeat(TITLE_PADDING);
        let mut line = format!(
            "{}{pad}{title}{pad}{}",
            self.fill.to_string().repeat(side),
            self.fill.to_string().repeat(side),
        );
        // Odd leftover cell goes to the right edge.
        while display_width(&line) < width {
            line.push(self.fill);
        }
        line
    }
}
