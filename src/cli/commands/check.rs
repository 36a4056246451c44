//! Check command implementation.
//!
//! The `traincheck check` command reads report text from a file or stdin,
//! runs the checker, and renders the result. Exit code 0 means every
//! required training is current; 1 means at least one is missing.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checker::{check_trainings, extract_name, format_label, CheckReport};
use crate::cli::args::CheckArgs;
use crate::error::{Result, TraincheckError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::{display, resolve_required};

/// JSON payload for `check --json`.
#[derive(Debug, Serialize)]
struct CheckJson<'a> {
    name: Option<String>,
    label: String,
    all_satisfied: bool,
    trainings: &'a CheckReport,
    missing: Vec<&'a str>,
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn read_report(&self) -> Result<String> {
        match self.args.file.as_deref() {
            None => read_stdin(),
            Some(path) if path == Path::new("-") => read_stdin(),
            Some(path) => {
                if !path.exists() {
                    return Err(TraincheckError::ReportNotFound {
                        path: path.to_path_buf(),
                    });
                }
                fs::read_to_string(path).map_err(|e| TraincheckError::ReportRead {
                    path: PathBuf::from(path),
                    message: e.to_string(),
                })
            }
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let required = resolve_required(self.args.requirements.as_deref())?;
        if required.is_empty() {
            ui.warning("Requirements list is empty; nothing to check");
        }

        let text = self.read_report()?;
        tracing::debug!(bytes = text.len(), items = required.len(), "checking report");

        let report = check_trainings(&text, &required);
        let name = extract_name(&text);

        if self.args.json {
            let payload = CheckJson {
                label: format_label(name.as_deref(), report.all_satisfied()),
                name,
                all_satisfied: report.all_satisfied(),
                missing: report.missing().collect(),
                trainings: &report,
            };
            let json = serde_json::to_string_pretty(&payload).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            if ui.output_mode().shows_detail() {
                display::show_check_report(ui, &report);
            }
            display::show_missing(ui, &report);
            ui.message("");
            display::show_summary(ui, &report, name.as_deref());
        }

        if report.all_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
