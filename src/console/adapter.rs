//! Capability provider for terminal dimensions, interactivity, and color policy.

use std::env;
use std::io::IsTerminal;

/// Fallback dimensions when the terminal cannot be queried (no tty, CI).
const FALLBACK_WIDTH: usize = 80;
const FALLBACK_HEIGHT: usize = 24;

/// Capability contract consumed by the run harness and the table renderer.
///
/// Implementations are queried per call; nothing caches dimensions across
/// calls, since a terminal may be resized between runs.
pub trait Console {
    /// Terminal width in character cells.
    fn width(&self) -> usize;

    /// Terminal height in character cells.
    fn height(&self) -> usize;

    /// Whether output goes to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Whether colored output is allowed. Always `false` when a
    /// `NO_COLOR`-equivalent signal is present or output is non-interactive.
    fn colors_enabled(&self) -> bool;

    /// Whether decorative output (dividers, banners) should be printed.
    fn decorations_enabled(&self) -> bool {
        self.is_interactive() || self.colors_enabled()
    }
}

/// `NO_COLOR` forces colors off when set to any non-empty value.
fn no_color_requested() -> bool {
    env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Console backed by the real terminal attached to stdout.
#[derive(Debug, Clone, Default)]
pub struct SystemConsole {
    width_override: Option<usize>,
    force_no_color: bool,
}

impl SystemConsole {
    /// Console with auto-detected capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the reported width instead of querying the terminal.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width_override = Some(width);
        self
    }

    /// Disable colors regardless of environment detection (`--no-color`).
    #[must_use]
    pub fn with_colors_disabled(mut self) -> Self {
        self.force_no_color = true;
        self
    }

    fn terminal_size() -> (usize, usize) {
        crossterm::terminal::size().map_or((FALLBACK_WIDTH, FALLBACK_HEIGHT), |(w, h)| {
            (usize::from(w.max(1)), usize::from(h.max(1)))
        })
    }
}

impl Console for SystemConsole {
    fn width(&self) -> usize {
        self.width_override
            .unwrap_or_else(|| Self::terminal_size().0)
    }

    fn height(&self) -> usize {
        Self::terminal_size().1
    }

    fn is_interactive(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    fn colors_enabled(&self) -> bool {
        !self.force_no_color && !no_color_requested() && self.is_interactive()
    }
}

/// Console with fixed capabilities, for tests and non-terminal embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConsole {
    /// Reported terminal width.
    pub width: usize,
    /// Reported terminal height.
    pub height: usize,
    /// Reported interactivity flag.
    pub interactive: bool,
    /// Reported color policy.
    pub colors: bool,
}

impl Default for StaticConsole {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            height: FALLBACK_HEIGHT,
            interactive: false,
            colors: false,
        }
    }
}

impl StaticConsole {
    /// Non-interactive, colorless console of the given width.
    #[must_use]
    pub fn plain(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Interactive console of the given width with colors enabled.
    #[must_use]
    pub fn interactive(width: usize) -> Self {
        Self {
            width,
            interactive: true,
            colors: true,
            ..Self::default()
        }
    }
}

impl Console for StaticConsole {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn colors_enabled(&self) -> bool {
        self.colors
    }
}
