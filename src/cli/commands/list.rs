//! List command implementation.
//!
//! The `traincheck list` command prints the required trainings in display
//! order, so users can see exactly which names the checker matches against.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::{TraincheckTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::resolve_required;

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let required = resolve_required(self.args.requirements.as_deref())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&required).map_err(anyhow::Error::from)?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = TraincheckTheme::new();
        ui.message(&format!("{}", theme.key.apply_to("Required trainings:")));
        for (i, training) in required.iter().enumerate() {
            ui.message(&format!(
                "  {} {}",
                theme.dim.apply_to(format!("{}.", i + 1)),
                training
            ));
        }

        Ok(CommandResult::success())
    }
}
