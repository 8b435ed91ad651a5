//! Interactive confirmation used before destructive operations.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm as DialoguerConfirm};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal prompt; defaults to "no".
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Ok(DialoguerConfirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// Answers every question with a fixed value, e.g. for `--yes`.
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}
