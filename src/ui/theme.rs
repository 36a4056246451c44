//! Visual theme and styling.

use console::Style;

/// Traincheck's visual theme.
#[derive(Debug, Clone)]
pub struct TraincheckTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for contextual hints (cyan dim).
    pub hint: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for TraincheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TraincheckTheme {
    /// Create the default traincheck theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            hint: Style::new().cyan().dim(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            key: Style::new(),
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
            self.header.apply_to("🦺"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = TraincheckTheme::plain();
        let msg = theme.format_success("All current");
        assert!(msg.contains("✓"));
        assert!(msg.contains("All current"));
    }

    #[test]
    fn theme_formats_warning() {
        let theme = TraincheckTheme::plain();
        let msg = theme.format_warning("Empty list");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Empty list"));
    }

    #[test]
    fn theme_formats_error() {
        let theme = TraincheckTheme::plain();
        let msg = theme.format_error("Missing");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Missing"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = TraincheckTheme::plain();
        let msg = theme.format_header("Safety Training Checker");
        assert!(msg.contains("🦺"));
        assert!(msg.contains("Safety Training Checker"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = TraincheckTheme::default();
        let new = TraincheckTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
