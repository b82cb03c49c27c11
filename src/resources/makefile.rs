//! Makefile lint target resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};

/// Targets appended to an existing Makefile.
const LINT_TARGETS: &str = "\n\
.PHONY: lint lint-fix\n\
\n\
lint:\n\
\tgolangci-lint run\n\
\n\
lint-fix:\n\
\tgolangci-lint run --fix\n";

/// Lint/lint-fix targets in the project Makefile.
///
/// Purely additive: a project without a Makefile is left alone, and a
/// Makefile that already defines a `lint:` target is never touched again.
#[derive(Debug, Clone)]
pub struct MakefileResource {
    /// Path to the project Makefile.
    pub path: PathBuf,
}

impl MakefileResource {
    /// Create a new Makefile resource.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

/// Whether Makefile content already defines a `lint` target.
///
/// A plain text search, matching a target definition at the start of a line.
#[must_use]
pub fn has_lint_target(content: &str) -> bool {
    content.lines().any(|line| {
        let line = line.trim_end();
        line == "lint:" || line.starts_with("lint:") || line.starts_with("lint :")
    })
}

impl Resource for MakefileResource {
    fn description(&self) -> String {
        "Makefile lint targets".to_string()
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.path.is_file() {
            return Ok(ResourceState::Invalid {
                reason: "no Makefile in project".to_string(),
            });
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read Makefile: {}", self.path.display()))?;

        if has_lint_target(&content) {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Missing)
        }
    }

    fn apply(&self) -> Result<ResourceChange> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read Makefile: {}", self.path.display()))?;

        // Guard again at apply time so a double apply stays idempotent.
        if has_lint_target(&content) {
            return Ok(ResourceChange::AlreadyCorrect);
        }

        let mut updated = content;
        updated.push_str(LINT_TARGETS);
        std::fs::write(&self.path, updated)
            .with_context(|| format!("append lint targets to {}", self.path.display()))?;

        Ok(ResourceChange::Applied)
    }
}
