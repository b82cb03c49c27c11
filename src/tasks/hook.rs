use anyhow::Result;

use super::{Context, HookMode, Task, TaskResult, apply_single};
use crate::resources::hook::HookFileResource;

/// Install the pre-commit hook, on explicit confirmation only.
#[derive(Debug)]
pub struct InstallPreCommitHook;

impl Task for InstallPreCommitHook {
    fn name(&self) -> &str {
        "Install pre-commit hook"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.fs_ops.exists(&ctx.git_dir())
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let install = match ctx.hook_mode {
            HookMode::Never => false,
            HookMode::Always => true,
            HookMode::Prompt => ctx
                .prompter
                .confirm("Install a pre-commit hook that runs golangci-lint?")?,
        };

        if !install {
            return Ok(TaskResult::Skipped("hook installation declined".to_string()));
        }

        let resource = HookFileResource::new(ctx.hook_target());
        apply_single(ctx, &resource, "install hook")
    }
}
