//! Lint configuration file resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Resource, ResourceChange, ResourceState};

/// The bundled lint configuration copied into the target project.
///
/// The destination is overwritten unconditionally: no merge, no backup.
#[derive(Debug, Clone)]
pub struct ConfigFileResource {
    /// Bundled template (e.g., templates/golangci.yml).
    pub source: PathBuf,
    /// Target path in the project (e.g., `<root>/.golangci.yml`).
    pub target: PathBuf,
}

impl ConfigFileResource {
    /// Create a new configuration file resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

impl Resource for ConfigFileResource {
    fn description(&self) -> String {
        self.target.file_name().map_or_else(
            || self.target.display().to_string(),
            |n| n.to_string_lossy().to_string(),
        )
    }

    fn current_state(&self) -> Result<ResourceState> {
        if !self.source.is_file() {
            return Ok(ResourceState::Invalid {
                reason: format!("template does not exist: {}", self.source.display()),
            });
        }

        if !self.target.exists() {
            return Ok(ResourceState::Missing);
        }

        let src_content = std::fs::read(&self.source)
            .with_context(|| format!("read template: {}", self.source.display()))?;
        let dst_content = std::fs::read(&self.target)
            .with_context(|| format!("read target: {}", self.target.display()))?;

        if src_content == dst_content {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect {
                current: "content differs".to_string(),
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

        std::fs::copy(&self.source, &self.target)
            .with_context(|| format!("copy lint config to {}", self.target.display()))?;

        Ok(ResourceChange::Applied)
    }
}
