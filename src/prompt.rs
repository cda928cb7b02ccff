//! User input and interaction handling.
//! Dialoguer-backed prompts for interactive module creation and for
//! destructive-action confirmation.

use crate::config::Defaults;
use crate::descriptor::Difficulty;
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};

/// Prompts for the scaffolding defaults, preselecting the configured
/// values. Returns an updated copy of `defaults`.
pub fn prompt_defaults(defaults: &Defaults) -> Result<Defaults> {
    let category: String = Input::new()
        .with_prompt("Category")
        .default(defaults.category.clone())
        .interact_text()
        .map_err(|e| Error::ConfigError(e.to_string()))?;

    let difficulty_index = Difficulty::ALL
        .iter()
        .position(|d| *d == defaults.difficulty)
        .unwrap_or(0);
    let difficulty_labels: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Difficulty")
        .default(difficulty_index)
        .items(&difficulty_labels)
        .interact()
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    let difficulty = Difficulty::ALL[selection];

    let language: String = Input::new()
        .with_prompt("Language")
        .default(defaults.language.clone())
        .interact_text()
        .map_err(|e| Error::ConfigError(e.to_string()))?;

    let author: String = Input::new()
        .with_prompt("Author")
        .default(defaults.author.clone())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| Error::ConfigError(e.to_string()))?;

    Ok(Defaults { author, category, difficulty, language })
}

/// Asks for confirmation before a destructive action. `skip` bypasses the
/// prompt (the --force path).
pub fn confirm(skip: bool, message: String) -> Result<bool> {
    if skip {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| Error::ConfigError(e.to_string()))
}
