//! External command execution.
//!
//! Package-manager invocations go through the [`Executor`] trait so that the
//! installer chain can be exercised in tests without touching the host
//! system. Production code uses [`SystemExecutor`].
use anyhow::{Context as _, Result};
use std::process::{Command, Output};

/// Result of a command execution.
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl ExecResult {
    /// Combined stdout/stderr detail for log messages.
    ///
    /// Package managers are inconsistent about which stream carries the
    /// useful diagnostics, so both are surfaced.
    #[must_use]
    pub fn detail(&self) -> String {
        let out = self.stdout.trim();
        let err = self.stderr.trim();
        if err.is_empty() {
            out.to_string()
        } else if out.is_empty() {
            err.to_string()
        } else {
            format!("{out}\n{err}")
        }
    }
}

/// Interface for running external commands.
pub trait Executor: Send + Sync {
    /// Run a command, capturing output without failing on non-zero exit.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command could not be spawned at all
    /// (e.g. the program does not exist).
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// Production [`Executor`] that spawns real processes.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_unchecked(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to execute: {program}"))?;
        Ok(ExecResult::from(output))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
