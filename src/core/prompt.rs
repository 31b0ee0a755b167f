//! Yes/no confirmation.
//!
//! Interactive terminals get a dialoguer prompt; piped stdin is read as a
//! single answer line so scripts can answer `y`.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm as DialoguerConfirm;
use tracing::debug;

use crate::error::Result;

/// Asks the user a yes/no question. Anything other than yes is a no.
pub trait Confirm {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Prompt on the controlling terminal, or read an answer from stdin.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, question: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            return DialoguerConfirm::new()
                .with_prompt(question)
                .default(false)
                .interact()
                .map_err(Into::into);
        }

        print!("{} (y/N): ", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        debug!(answered = !answer.is_empty(), "read confirmation from stdin");
        Ok(is_yes(&answer))
    }
}

/// Only `y` (any case) counts as yes.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Fixed answer, for non-interactive callers and tests.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}
