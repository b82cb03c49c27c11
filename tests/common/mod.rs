// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed test project, a scripted executor
// for simulating package-manager behaviour, and context factories so each
// integration test can set up an isolated environment without repeating
// boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use lintsetup_cli::exec::{ExecResult, Executor};
use lintsetup_cli::logging::{Log, Logger};
use lintsetup_cli::operations::SystemFileSystemOps;
use lintsetup_cli::platform::{Distro, Os, Platform};
use lintsetup_cli::prompt::StaticPrompter;
use lintsetup_cli::tasks::{Context, HookMode};

/// Default template content written by [`TestProject::new`].
pub const TEMPLATE_CONTENT: &str = "run:\n  timeout: 5m\n\nlinters:\n  enable:\n    - govet\n";

/// A scripted [`Executor`] that simulates package-manager invocations.
///
/// `run_unchecked` consumes a FIFO queue of `(success, stdout)` responses
/// and records every call; `which` reports only the programs registered via
/// [`with_program`](Self::with_program).
#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<(bool, String)>>,
    available: Vec<String>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl ScriptedExecutor {
    pub fn new(responses: Vec<(bool, String)>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            available: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A single successful, silent response.
    pub fn succeeding() -> Self {
        Self::new(vec![(true, String::new())])
    }

    /// No queued responses: every spawned command fails.
    pub fn failing() -> Self {
        Self::new(vec![])
    }

    /// Register `program` as available on PATH.
    pub fn with_program(mut self, program: &str) -> Self {
        self.available.push(program.to_string());
        self
    }

    /// Every `(program, args)` pair spawned so far.
    pub fn recorded_calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Executor for ScriptedExecutor {
    fn run_unchecked(&self, program: &str, args: &[&str]) -> anyhow::Result<ExecResult> {
        self.calls.lock().expect("calls lock").push((
            program.to_string(),
            args.iter().map(|s| (*s).to_string()).collect(),
        ));
        let (success, stdout) = self
            .responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or((false, String::new()));
        Ok(ExecResult {
            stdout,
            stderr: String::new(),
            success,
            code: Some(i32::from(!success)),
        })
    }

    fn which(&self, program: &str) -> bool {
        self.available.iter().any(|p| p == program)
    }
}

/// An isolated test project backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped. A bundled template
/// file is written next to the project so the config task has a source.
pub struct TestProject {
    /// Temporary directory containing the project.
    pub root: tempfile::TempDir,
    /// Path of the template file consumed by the config task.
    pub template: PathBuf,
}

impl TestProject {
    /// Create a project directory with a valid template alongside it.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let template = root.path().join("template-golangci.yml");
        std::fs::write(&template, TEMPLATE_CONTENT).expect("write template");
        Self { root, template }
    }

    /// Write a Makefile with the given content into the project.
    pub fn with_makefile(self, content: &str) -> Self {
        std::fs::write(self.root.path().join("Makefile"), content).expect("write Makefile");
        self
    }

    /// Create a `.git/hooks` directory so hook installation applies.
    pub fn with_git_dir(self) -> Self {
        std::fs::create_dir_all(self.root.path().join(".git").join("hooks"))
            .expect("create .git/hooks");
        self
    }

    /// Path helpers mirroring the task context.
    pub fn config_target(&self) -> PathBuf {
        self.root.path().join(".golangci.yml")
    }

    pub fn makefile_path(&self) -> PathBuf {
        self.root.path().join("Makefile")
    }

    pub fn hook_target(&self) -> PathBuf {
        self.root.path().join(".git").join("hooks").join("pre-commit")
    }

    /// Build a task [`Context`] over this project.
    ///
    /// Uses the real filesystem, the given platform and executor, and a
    /// static prompter with the given hook answer. Returns the logger so
    /// tests can inspect the recorded summary.
    pub fn context(
        &self,
        platform: Platform,
        executor: Arc<dyn Executor>,
        hook_answer: bool,
    ) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::new());
        let ctx = Context {
            platform: Arc::new(platform),
            log: Arc::clone(&log) as Arc<dyn Log>,
            dry_run: false,
            project_root: self.root.path().to_path_buf(),
            template: self.template.clone(),
            executor,
            fs_ops: Arc::new(SystemFileSystemOps),
            prompter: Arc::new(StaticPrompter {
                answer: hook_answer,
            }),
            hook_mode: HookMode::Prompt,
        };
        (ctx, log)
    }
}

/// A Debian platform tag, the default simulation target.
pub fn debian() -> Platform {
    Platform::new(Os::Linux, Distro::Debian)
}
