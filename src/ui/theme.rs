//! Visual theme and styling.

use console::Style;

/// Liftlog's visual theme.
#[derive(Debug, Clone)]
pub struct LiftlogTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational elements (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for ids shown next to names (dim).
    pub id: Style,
    /// Style for dates and relative times (dim).
    pub date: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for an improved set (green).
    pub trend_up: Style,
    /// Style for a regressed set (red).
    pub trend_down: Style,
}

impl Default for LiftlogTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LiftlogTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            id: Style::new().dim(),
            date: Style::new().dim(),
            key: Style::new().bold(),
            trend_up: Style::new().green(),
            trend_down: Style::new().red(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            id: Style::new(),
            date: Style::new(),
            key: Style::new(),
            trend_up: Style::new(),
            trend_down: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▍"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a name followed by its id in brackets.
    pub fn format_named(&self, name: &str, id: &str) -> String {
        format!(
            "{} {}",
            self.highlight.apply_to(name),
            self.id.apply_to(format!("[{}]", id))
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
