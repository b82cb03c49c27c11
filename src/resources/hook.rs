//! Git pre-commit hook resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};

/// Generated pre-commit hook content.
///
/// The hook must not block commits on machines where the linter is absent;
/// it prints a notice and exits 0 instead.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# pre-commit hook installed by lintsetup\n\
if ! command -v golangci-lint >/dev/null 2>&1; then\n\
    echo \"pre-commit: golangci-lint not found, skipping lint\" >&2\n\
    exit 0\n\
fi\n\
exec golangci-lint run --config .golangci.yml\n";

/// An executable pre-commit hook under `.git/hooks/`.
///
/// Installation overwrites any existing hook unconditionally; the decision
/// to install at all is taken by the hook task, not here.
#[derive(Debug, Clone)]
pub struct HookFileResource {
    /// Target path (e.g., `<root>/.git/hooks/pre-commit`).
    pub target: PathBuf,
}

impl HookFileResource {
    /// Create a new hook file resource.
    #[must_use]
    pub const fn new(target: PathBuf) -> Self {
        Self { target }
    }
}

impl Resource for HookFileResource {
    fn description(&self) -> String {
        self.target.file_name().map_or_else(
            || self.target.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.target.exists() {
            return Ok(ResourceState::Missing);
        }

        let content = std::fs::read_to_string(&self.target)
            .with_context(|| format!("read hook: {}", self.target.display()))?;

        if content == HOOK_SCRIPT {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: "existing hook differs".to_string(),
            })
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        if let Some(parent) = self.target.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory: {}", parent.display()))?;
        }

        std::fs::write(&self.target, HOOK_SCRIPT)
            .with_context(|| format!("write hook: {}", self.target.display()))?;

        // Make executable on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.target)
                .with_context(|| format!("reading hook metadata: {}", self.target.display()))?
                .permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&self.target, perms)
                .with_context(|| format!("setting hook permissions: {}", self.target.display()))?;
        }

        Ok(ResourceChange::Applied)
    }
}
