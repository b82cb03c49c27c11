use anyhow::Result;

use super::{Context, Task, TaskResult, apply_single};
use crate::error::ConfigError;
use crate::resources::lint_config::ConfigFileResource;

/// Copy the bundled lint configuration into the project as `.golangci.yml`.
#[derive(Debug)]
pub struct InstallLintConfig;

impl Task for InstallLintConfig {
    fn name(&self) -> &str {
        "Install lint configuration"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn fatal(&self) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        // A missing template is fatal before anything in the project is
        // touched.
        if !ctx.fs_ops.is_file(&ctx.template) {
            return Err(ConfigError::TemplateMissing {
                path: ctx.template.clone(),
            }
            .into());
        }

        let resource = ConfigFileResource::new(ctx.template.clone(), ctx.config_target());
        apply_single(ctx, &resource, "install config")
    }
}
