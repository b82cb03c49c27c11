use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::resources::Resource as _;
use crate::resources::linter::{LinterResource, script_bin_dir};
use crate::resources::ResourceState;

/// Install the golangci-lint binary through the platform's backend chain.
#[derive(Debug)]
pub struct InstallLinter;

impl Task for InstallLinter {
    fn name(&self) -> &str {
        "Install golangci-lint"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn fatal(&self) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let bin_dir = script_bin_dir(&ctx.project_root, ctx.executor.as_ref());
        let resource = LinterResource::new(&ctx.platform, bin_dir, ctx.executor.as_ref());

        if resource.current_state()? == ResourceState::Correct {
            ctx.log.info("golangci-lint already installed");
            return Ok(TaskResult::Ok);
        }

        ctx.log.info(&format!(
            "backend chain for {}: {}",
            ctx.platform,
            resource
                .chain()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ));

        if ctx.dry_run {
            ctx.log.dry_run("install golangci-lint");
            return Ok(TaskResult::DryRun);
        }

        let backend = resource.install()?;
        ctx.log
            .info(&format!("installed golangci-lint via {backend}"));
        Ok(TaskResult::Ok)
    }
}
