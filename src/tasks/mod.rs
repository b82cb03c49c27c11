//! Named setup tasks executed in a fixed order.
//!
//! The pipeline is a single synchronous pass: detect, install the linter,
//! install the configuration, augment the Makefile, optionally install the
//! hook. Tasks marked [`Task::fatal`] abort the remaining pipeline on
//! failure; the rest are recorded and reported in the summary.
pub mod context;
pub mod hook;
pub mod install_linter;
pub mod lint_config;
pub mod makefile;

pub use context::{Context, HookMode};

use anyhow::Result;

use crate::logging::TaskStatus;
use crate::resources::{Resource, ResourceChange, ResourceState};

/// Result of a single task execution.
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task was skipped (declined, or nothing applicable to do).
    Skipped(String),
    /// Task ran in dry-run mode.
    DryRun,
}

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task should run for the current project/platform.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Whether a failure of this task aborts the remaining pipeline.
    ///
    /// Linter and configuration installation are load-bearing; Makefile and
    /// hook steps are additive extras.
    fn fatal(&self) -> bool {
        false
    }

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task fails, such as when every install
    /// backend fails, the bundled template is missing, or file operations
    /// are not permitted.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The complete setup pipeline, in execution order.
#[must_use]
pub fn all_setup_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(install_linter::InstallLinter),
        Box::new(lint_config::InstallLintConfig),
        Box::new(makefile::AugmentMakefile),
        Box::new(hook::InstallPreCommitHook),
    ]
}

/// Execute a task, recording the result in the logger.
///
/// Returns the recorded status so the caller can stop the pipeline when a
/// [`Task::fatal`] task fails.
pub fn execute(task: &dyn Task, ctx: &Context) -> TaskStatus {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return TaskStatus::NotApplicable;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
            TaskStatus::Ok
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
            TaskStatus::Skipped
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
            TaskStatus::DryRun
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
            TaskStatus::Failed
        }
    }
}

/// Check a single resource and apply it if needed, honouring dry-run.
///
/// # Errors
///
/// Propagates errors from `current_state()` and `apply()`.
pub fn apply_single(ctx: &Context, resource: &dyn Resource, verb: &str) -> Result<TaskResult> {
    match resource.current_state()? {
        ResourceState::Correct => {
            ctx.log
                .info(&format!("{} already ok", resource.description()));
            Ok(TaskResult::Ok)
        }
        ResourceState::Invalid { reason } => Ok(TaskResult::Skipped(reason)),
        ResourceState::Missing | ResourceState::Incorrect { .. } => {
            if ctx.dry_run {
                ctx.log
                    .dry_run(&format!("{verb}: {}", resource.description()));
                return Ok(TaskResult::DryRun);
            }
            match resource.apply()? {
                ResourceChange::Applied => {
                    ctx.log.info(&format!("{verb}: {}", resource.description()));
                    Ok(TaskResult::Ok)
                }
                ResourceChange::AlreadyCorrect => Ok(TaskResult::Ok),
                ResourceChange::Skipped { reason } => Ok(TaskResult::Skipped(reason)),
            }
        }
    }
}
