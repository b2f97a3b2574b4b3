//! ConfirmationPrompt port
//!
//! Destructive decisions (sick-leave overlap override, employee deletion,
//! period cancellation) go through this trait. Declining must leave all
//! state untouched; the engine guarantees it by asking before any write.

/// Synchronous yes/no decision point.
pub trait ConfirmationPrompt {
    /// Present `prompt` and return the user's decision.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<T: ConfirmationPrompt + ?Sized> ConfirmationPrompt for Box<T> {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Accepts everything. Used for `--yes` runs and scripted callers.
pub struct AlwaysConfirm;

impl ConfirmationPrompt for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines everything. Safe default for non-interactive contexts.
pub struct NeverConfirm;

impl ConfirmationPrompt for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_confirm_accepts() {
        assert!(AlwaysConfirm.confirm("delete everything?"));
    }

    #[test]
    fn never_confirm_declines() {
        assert!(!NeverConfirm.confirm("delete everything?"));
    }
}
