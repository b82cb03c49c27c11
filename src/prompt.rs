//! Interactive confirmation prompts.
//!
//! The hook installer asks before writing into `.git/hooks/`. The prompt
//! sits behind the [`Prompter`] trait so the answer can be fixed by CLI
//! flags and by tests.
use anyhow::Result;

/// Interface for yes/no confirmation.
pub trait Prompter: Send + Sync {
    /// Ask the user to confirm `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be displayed at all.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Interactive prompter backed by dialoguer.
///
/// A terminal that cannot take input (e.g. piped stdin) counts as a decline;
/// the hook step is strictly opt-in.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        match dialoguer::Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
        {
            Ok(answer) => Ok(answer),
            Err(_) => Ok(false),
        }
    }
}

/// Prompter with a fixed answer, for tests and non-interactive harnesses.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrompter {
    /// The answer returned for every confirmation.
    pub answer: bool,
}

impl Prompter for StaticPrompter {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.answer)
    }
}
