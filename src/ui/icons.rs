//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and colors
//! used everywhere a training's state is rendered.

use super::theme::TraincheckTheme;

/// Canonical status kinds used across all traincheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Training found marked current.
    Satisfied,
    /// Training not found current.
    Missing,
    /// Tab has not been checked yet.
    Pending,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Satisfied => "✓",
            Self::Missing => "✗",
            Self::Pending => "◌",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Satisfied => "[ok]",
            Self::Missing => "[MISSING]",
            Self::Pending => "[pending]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &TraincheckTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Satisfied => theme.success.apply_to(icon).to_string(),
            Self::Missing => theme.error.apply_to(icon).to_string(),
            Self::Pending => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &TraincheckTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<bool> for StatusKind {
    fn from(satisfied: bool) -> Self {
        if satisfied {
            Self::Satisfied
        } else {
            Self::Missing
        }
    }
}
