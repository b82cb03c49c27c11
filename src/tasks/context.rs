use std::path::PathBuf;
use std::sync::Arc;

use crate::exec::Executor;
use crate::logging::Log;
use crate::operations::FileSystemOps;
use crate::platform::Platform;
use crate::prompt::Prompter;

/// How the pre-commit hook decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookMode {
    /// Ask interactively before installing.
    Prompt,
    /// Install without asking (`--hook`).
    Always,
    /// Never install, never ask (`--no-hook`).
    Never,
}

/// Shared context for task execution.
pub struct Context {
    /// Detected platform information.
    pub platform: Arc<Platform>,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
    /// Target Go project directory.
    pub project_root: PathBuf,
    /// Resolved path of the bundled configuration template.
    ///
    /// The path is resolved up front but its existence is only checked by
    /// the config task, so that a missing template fails there, fatally,
    /// before the target directory is modified.
    pub template: PathBuf,
    /// Command executor (for testing or real system calls).
    pub executor: Arc<dyn Executor>,
    /// Filesystem operation abstraction (injectable for testing).
    pub fs_ops: Arc<dyn FileSystemOps>,
    /// Confirmation prompter for the hook step.
    pub prompter: Arc<dyn Prompter>,
    /// Hook installation policy.
    pub hook_mode: HookMode,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("platform", &self.platform)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .field("project_root", &self.project_root)
            .field("template", &self.template)
            .field("executor", &"<dyn Executor>")
            .field("fs_ops", &"<dyn FileSystemOps>")
            .field("prompter", &"<dyn Prompter>")
            .field("hook_mode", &self.hook_mode)
            .finish()
    }
}

impl Context {
    /// Target path of the installed lint configuration.
    #[must_use]
    pub fn config_target(&self) -> PathBuf {
        self.project_root.join(".golangci.yml")
    }

    /// Path of the project Makefile.
    #[must_use]
    pub fn makefile_path(&self) -> PathBuf {
        self.project_root.join("Makefile")
    }

    /// Path of the project `.git` directory.
    #[must_use]
    pub fn git_dir(&self) -> PathBuf {
        self.project_root.join(".git")
    }

    /// Target path of the pre-commit hook.
    #[must_use]
    pub fn hook_target(&self) -> PathBuf {
        self.git_dir().join("hooks").join("pre-commit")
    }
}
