use std::sync::Arc;

use anyhow::Result;

use crate::cli::{GlobalOpts, InstallOpts};
use crate::exec::SystemExecutor;
use crate::logging::{Log, Logger, TaskStatus};
use crate::operations::SystemFileSystemOps;
use crate::platform::Platform;
use crate::prompt::TerminalPrompter;
use crate::tasks::{self, Context, HookMode, Task};

/// Run the install command.
///
/// # Errors
///
/// Returns an error if the project root cannot be resolved, a fatal task
/// (linter or configuration installation) fails, or any task recorded a
/// failure.
pub fn run(global: &GlobalOpts, opts: &InstallOpts) -> Result<()> {
    let log = Arc::new(Logger::new());
    let platform = Platform::detect();
    let root = super::resolve_project_root(opts.project_root.as_deref())?;
    let template = super::resolve_template(global.template.as_deref());

    let version = option_env!("LINTSETUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
    log.info(&format!("lintsetup {version}"));
    log.info(&format!("platform: {platform}"));
    log.info(&format!("project: {}", root.display()));

    let ctx = Context {
        platform: Arc::new(platform),
        log: Arc::clone(&log) as Arc<dyn Log>,
        dry_run: global.dry_run,
        project_root: root,
        template,
        executor: Arc::new(SystemExecutor),
        fs_ops: Arc::new(SystemFileSystemOps),
        prompter: Arc::new(TerminalPrompter),
        hook_mode: hook_mode_from_opts(opts),
    };

    let all_tasks = tasks::all_setup_tasks();
    let tasks_to_run = filter_tasks(&all_tasks, &opts.only, &opts.skip);

    for task in tasks_to_run {
        let status = tasks::execute(task, &ctx);
        if status == TaskStatus::Failed && task.fatal() {
            log.print_summary();
            anyhow::bail!("{} failed", task.name());
        }
    }

    log.print_summary();

    if log.has_failures() {
        anyhow::bail!("one or more tasks failed");
    }
    Ok(())
}

/// Resolve the hook policy from the `--hook`/`--no-hook` flags.
const fn hook_mode_from_opts(opts: &InstallOpts) -> HookMode {
    if opts.no_hook {
        HookMode::Never
    } else if opts.hook {
        HookMode::Always
    } else {
        HookMode::Prompt
    }
}

/// Filter the task list by the `--only` and `--skip` flags.
///
/// Matching is case-insensitive substring matching against the task name;
/// `--only` wins over `--skip` when both are given.
pub(crate) fn filter_tasks<'a>(
    all: &'a [Box<dyn Task>],
    only: &[String],
    skip: &[String],
) -> Vec<&'a dyn Task> {
    all.iter()
        .filter(|t| {
            let name = t.name().to_lowercase();
            if !only.is_empty() {
                return only.iter().any(|o| name.contains(&o.to_lowercase()));
            }
            if !skip.is_empty() {
                return !skip.iter().any(|s| name.contains(&s.to_lowercase()));
            }
            true
        })
        .map(AsRef::as_ref)
        .collect()
}
