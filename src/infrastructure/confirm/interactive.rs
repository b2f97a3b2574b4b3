//! Interactive confirmation via the terminal
//!
//! Presents destructive decisions as a dialoguer yes/no prompt. Defaults
//! to "no"; a prompt failure (e.g. no TTY) counts as a decline.

use dialoguer::Confirm;

use crate::domain::ports::ConfirmationPrompt;

pub struct InteractiveConfirmation;

impl InteractiveConfirmation {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InteractiveConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPrompt for InteractiveConfirmation {
    fn confirm(&self, prompt: &str) -> bool {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
