use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::cli::{CheckOpts, GlobalOpts};
use crate::exec::{Executor, SystemExecutor};
use crate::logging::Logger;
use crate::platform::Platform;
use crate::resources::Resource as _;
use crate::resources::hook::HookFileResource;
use crate::resources::lint_config::ConfigFileResource;
use crate::resources::linter::{LinterResource, script_bin_dir};
use crate::resources::makefile::MakefileResource;
use crate::resources::ResourceState;

/// Snapshot of a project's lint setup state.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Detected platform tag.
    pub platform: String,
    /// Whether the linter binary is installed.
    pub linter_installed: bool,
    /// State of `.golangci.yml` relative to the bundled template.
    pub config: String,
    /// State of the Makefile lint targets.
    pub makefile: String,
    /// State of the pre-commit hook.
    pub hook: String,
}

/// Run the check command: report state, change nothing.
///
/// # Errors
///
/// Returns an error if the project root cannot be resolved, or to signal a
/// non-zero exit when the linter or the project configuration is missing.
pub fn run(global: &GlobalOpts, opts: &CheckOpts) -> Result<()> {
    let log = Logger::new();
    let platform = Platform::detect();
    let root = super::resolve_project_root(opts.project_root.as_deref())?;
    let template = super::resolve_template(global.template.as_deref());

    let executor = SystemExecutor;
    let report = build_report(&platform, &root, &template, &executor);

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        log.stage("Lint setup state");
        log.info(&format!("platform:   {}", report.platform));
        log.info(&format!(
            "linter:     {}",
            if report.linter_installed {
                "installed"
            } else {
                "missing"
            }
        ));
        log.info(&format!("config:     {}", report.config));
        log.info(&format!("makefile:   {}", report.makefile));
        log.info(&format!("hook:       {}", report.hook));
    }

    if !report.linter_installed {
        anyhow::bail!("golangci-lint is not installed");
    }
    if report.config == "missing" {
        anyhow::bail!("no .golangci.yml in project");
    }
    Ok(())
}

/// Build the report by checking each resource's current state.
#[must_use]
pub fn build_report(
    platform: &Platform,
    root: &Path,
    template: &Path,
    executor: &dyn Executor,
) -> CheckReport {
    let bin_dir = script_bin_dir(root, executor);
    let linter = LinterResource::new(platform, bin_dir, executor);
    let linter_installed = matches!(linter.current_state(), Ok(ResourceState::Correct));

    let config = ConfigFileResource::new(template.to_path_buf(), root.join(".golangci.yml"));
    let makefile = MakefileResource::new(root.join("Makefile"));

    let hook = if root.join(".git").exists() {
        let resource = HookFileResource::new(root.join(".git").join("hooks").join("pre-commit"));
        state_label(resource.current_state().ok())
    } else {
        "not a git repository".to_string()
    };

    CheckReport {
        platform: platform.to_string(),
        linter_installed,
        config: state_label(config.current_state().ok()),
        makefile: state_label(makefile.current_state().ok()),
        hook,
    }
}

fn state_label(state: Option<ResourceState>) -> String {
    match state {
        Some(ResourceState::Correct) => "ok".to_string(),
        Some(ResourceState::Missing) => "missing".to_string(),
        Some(ResourceState::Incorrect { current }) => current,
        Some(ResourceState::Invalid { reason }) => reason,
        None => "unknown".to_string(),
    }
}
