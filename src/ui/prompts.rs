//! Interactive prompts.

use std::io::BufRead;

use console::Term;
use dialoguer::{Confirm, Input, Select};

use crate::error::Result;

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// A line containing only this string ends a multiline paste.
pub const MULTILINE_TERMINATOR: &str = ".";

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input => prompt_input(prompt, term),
        PromptType::Multiline => prompt_multiline(prompt, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(true);

    let result = Confirm::new()
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let input = Input::<String>::new().with_prompt(&prompt.question);

    let result: String = if let Some(default) = &prompt.default {
        input.default(default.clone()).interact_on(term)?
    } else {
        input.interact_on(term)?
    };

    Ok(PromptResult::String(result))
}

/// Read pasted text line by line from stdin until a terminator line or EOF.
///
/// The terminator line itself is not part of the result. Every kept line is
/// re-terminated with '\n', which is irrelevant to the line-oriented checker.
fn prompt_multiline(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    term.write_line(&prompt.question)?;
    term.write_line(&format!(
        "(end with a line containing only \"{}\")",
        MULTILINE_TERMINATOR
    ))?;

    let stdin = std::io::stdin();
    let mut text = String::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim() == MULTILINE_TERMINATOR {
            break;
        }
        text.push_str(&line);
        text.push('\n');
    }

    Ok(PromptResult::String(text))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on(term)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}
