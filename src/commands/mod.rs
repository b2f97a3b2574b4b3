//! Command handlers
//!
//! Each handler parses its string arguments, drives the engine, and
//! prints plain-text results. Library errors surface through `anyhow`
//! with their display messages intact.

mod absence;
mod count;
mod employee;
mod lts;
mod special_day;
mod undo;
mod vacation;

pub use absence::cmd_absence;
pub use count::cmd_count;
pub use employee::cmd_employee;
pub use lts::cmd_lts;
pub use special_day::cmd_special_day;
pub use undo::{cmd_history, cmd_undo};
pub use vacation::cmd_vacation;

use std::path::PathBuf;

use anyhow::Result;

use escala::config::Config;
use escala::domain::ports::{AlwaysConfirm, ConfirmationPrompt};
use escala::domain::services::ShiftRotationCalculator;
use escala::infrastructure::{InteractiveConfirmation, JsonFileStore};
use escala::LeaveEngine;

/// Engine wired for CLI use: JSON files plus a boxed prompt.
pub type CliEngine = LeaveEngine<JsonFileStore, Box<dyn ConfirmationPrompt>>;

/// Build the engine from config, CLI overrides and the `--yes` flag.
pub fn build_engine(
    config_path: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    yes: bool,
) -> Result<CliEngine> {
    let config = Config::load_or_default(config_path.as_deref())?;
    let dir = data_dir.unwrap_or_else(|| config.data_dir());
    let store = JsonFileStore::new(dir);
    let prompt: Box<dyn ConfirmationPrompt> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(InteractiveConfirmation::new())
    };
    let rotation = ShiftRotationCalculator::with_anchor(config.rotation_anchor()?);
    Ok(LeaveEngine::load(store, prompt, rotation)?)
}
