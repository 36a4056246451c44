//! Interactive command implementation.
//!
//! The `traincheck interactive` command is the tab-based checker: a select
//! loop over open tabs, each holding its own pasted report and last result.
//! Tab labels update after every check, so a glance at the list shows who
//! is compliant.

use crate::cli::args::InteractiveArgs;
use crate::error::Result;
use crate::session::{Session, SessionManager};
use crate::ui::{Prompt, PromptOption, PromptType, StatusKind, TraincheckTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::{display, resolve_required};

const TAB_NEW: &str = "new";
const TAB_QUIT: &str = "quit";

const ACTION_PASTE: &str = "paste";
const ACTION_RESULTS: &str = "results";
const ACTION_BACK: &str = "back";

/// The interactive command implementation.
pub struct InteractiveCommand {
    args: InteractiveArgs,
}

impl InteractiveCommand {
    /// Create a new interactive command.
    pub fn new(args: InteractiveArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InteractiveArgs {
        &self.args
    }

    fn tab_menu(&self, manager: &SessionManager) -> Prompt {
        let theme = TraincheckTheme::new();
        let mut options: Vec<PromptOption> = manager
            .iter()
            .enumerate()
            .map(|(i, session)| {
                let pending = if session.last_report().is_none() {
                    format!(" {}", theme.dim.apply_to(StatusKind::Pending.icon()))
                } else {
                    String::new()
                };
                PromptOption {
                    label: format!(
                        "{}{} {}",
                        session.label(),
                        pending,
                        theme
                            .dim
                            .apply_to(format!("(opened {})", session.created_at().format("%H:%M")))
                    ),
                    value: i.to_string(),
                }
            })
            .collect();
        options.push(PromptOption {
            label: "➕ New tab".to_string(),
            value: TAB_NEW.to_string(),
        });
        options.push(PromptOption {
            label: "Quit".to_string(),
            value: TAB_QUIT.to_string(),
        });

        Prompt {
            key: "tab".to_string(),
            question: "Select a tab".to_string(),
            prompt_type: PromptType::Select { options },
            default: None,
        }
    }

    fn action_menu(&self) -> Prompt {
        let options = vec![
            PromptOption {
                label: "Paste report text and check".to_string(),
                value: ACTION_PASTE.to_string(),
            },
            PromptOption {
                label: "Show last results".to_string(),
                value: ACTION_RESULTS.to_string(),
            },
            PromptOption {
                label: "Back to tabs".to_string(),
                value: ACTION_BACK.to_string(),
            },
        ];

        Prompt {
            key: "action".to_string(),
            question: "What next?".to_string(),
            prompt_type: PromptType::Select { options },
            default: None,
        }
    }

    fn run_tab(
        &self,
        ui: &mut dyn UserInterface,
        session: &mut Session,
        required: &[String],
    ) -> Result<()> {
        loop {
            ui.message("");
            ui.message(&session.label());

            match self.action_menu_choice(ui)?.as_str() {
                ACTION_PASTE => {
                    let text = ui
                        .prompt(&Prompt {
                            key: "report_text".to_string(),
                            question: "Paste the full training page text".to_string(),
                            prompt_type: PromptType::Multiline,
                            default: None,
                        })?
                        .as_string();

                    session.set_text(text);
                    session.check(required);
                    self.render(ui, session);
                }
                ACTION_RESULTS => match session.last_report() {
                    Some(_) => self.render(ui, session),
                    None => ui.warning("No check has been run in this tab yet"),
                },
                _ => return Ok(()),
            }
        }
    }

    fn action_menu_choice(&self, ui: &mut dyn UserInterface) -> Result<String> {
        Ok(ui.prompt(&self.action_menu())?.as_string())
    }

    fn render(&self, ui: &mut dyn UserInterface, session: &Session) {
        if let Some(report) = session.last_report() {
            if ui.output_mode().shows_detail() {
                display::show_check_report(ui, report);
            }
            display::show_missing(ui, report);
            ui.message("");
            display::show_summary(ui, report, session.name().as_deref());
        }
    }
}

impl Command for InteractiveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !ui.is_interactive() {
            ui.error("Interactive mode requires a terminal; use `traincheck check` instead");
            return Ok(CommandResult::failure(2));
        }

        let required = resolve_required(self.args.requirements.as_deref())?;
        if required.is_empty() {
            ui.warning("Requirements list is empty; every check will come up missing");
        }

        let mut manager = SessionManager::new();
        manager.create();

        ui.show_header("Safety Training Checker");

        loop {
            let choice = ui.prompt(&self.tab_menu(&manager))?.as_string();
            match choice.as_str() {
                TAB_QUIT => break,
                TAB_NEW => {
                    let id = manager.create();
                    tracing::debug!(tab = id.number(), "opened tab");
                }
                index => {
                    let Some(session) = index.parse().ok().and_then(|i: usize| manager.get_mut(i))
                    else {
                        continue;
                    };
                    self.run_tab(ui, session, &required)?;
                }
            }
        }

        Ok(CommandResult::success())
    }
}
