//! golangci-lint setup engine.
//!
//! One-shot installer that puts `golangci-lint` on the host through the
//! best-fit package manager for the detected platform and wires it into a
//! Go project: lint configuration, Makefile targets, and an optional
//! pre-commit hook.
//!
//! The public API is organised into four layers:
//!
//! - **[`platform`]** — classify the host OS and Linux distribution
//! - **[`resources`]** — idempotent `check + apply` primitives (linter, config, Makefile, hook)
//! - **[`tasks`]** — named units of work executed in a fixed sequential order
//! - **[`commands`]** — top-level subcommand orchestration (`install`, `check`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod exec;
pub mod logging;
pub mod operations;
pub mod platform;
pub mod prompt;
pub mod resources;
pub mod tasks;
