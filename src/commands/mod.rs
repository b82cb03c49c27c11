//! Top-level subcommand orchestration.
pub mod check;
pub mod install;

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Resolve the target project directory from the positional argument.
///
/// Defaults to the current directory when no argument is given.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined or the
/// resolved path is not a directory.
pub fn resolve_project_root(arg: Option<&Path>) -> Result<PathBuf> {
    let root = match arg {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?,
    };
    if !root.is_dir() {
        anyhow::bail!("project root is not a directory: {}", root.display());
    }
    Ok(root)
}

/// Resolve the bundled configuration template path.
///
/// Order: the `--template` flag, the `LINTSETUP_TEMPLATE` environment
/// variable, `templates/golangci.yml` next to the executable or two levels
/// above it (a cargo target directory), then under the current directory.
///
/// When no candidate exists the current-directory candidate is returned
/// unchanged: the config task checks existence itself and fails fatally with
/// the path in the message.
#[must_use]
pub fn resolve_template(flag: Option<&Path>) -> PathBuf {
    if let Some(p) = flag {
        return p.to_path_buf();
    }
    if let Ok(env) = std::env::var("LINTSETUP_TEMPLATE")
        && !env.is_empty()
    {
        return PathBuf::from(env);
    }

    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe()
        && let Some(parent) = exe.parent()
    {
        candidates.push(parent.join("templates").join("golangci.yml"));
        candidates.push(parent.join("../..").join("templates").join("golangci.yml"));
    }
    let cwd_candidate = PathBuf::from("templates").join("golangci.yml");
    candidates.push(cwd_candidate.clone());

    candidates
        .into_iter()
        .find(|c| c.is_file())
        .unwrap_or(cwd_candidate)
}
