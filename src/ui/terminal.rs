//! Interactive terminal UI.

use console::Term;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, OutputMode, Prompt, PromptResult, TraincheckTheme,
    UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Status output goes to stdout; errors go to stderr so scripted callers
/// can separate the two.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: TraincheckTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            TraincheckTheme::new()
        } else {
            TraincheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.term.write_line(msg).ok();
    }

    fn success(&mut self, msg: &str) {
        self.term.write_line(&self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        self.term.write_line(&self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        self.err.write_line(&self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        self.term
            .write_line(&format!("\n{}\n", self.theme.format_header(title)))
            .ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn terminal_ui_writes_without_panic() {
        let mut ui = TerminalUI::new(OutputMode::Normal);
        ui.message("message");
        ui.success("success");
        ui.warning("warning");
        ui.error("error");
        ui.show_header("header");
    }
}
