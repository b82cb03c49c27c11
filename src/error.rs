//! Domain-specific error types for the setup engine.
//!
//! Structured errors using [`thiserror`]. Internal modules return typed
//! errors ([`InstallError`], [`ConfigError`]); command handlers at the CLI
//! boundary convert them to [`anyhow::Error`] via the standard `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the setup engine.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Linter installation error (backend chain exhausted).
    #[error("Installation error: {0}")]
    Install(#[from] InstallError),

    /// Lint configuration error (missing template, I/O failure).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that arise while installing the linter binary.
#[derive(Error, Debug)]
pub enum InstallError {
    /// Every backend in the chain was attempted and none succeeded.
    #[error("could not install golangci-lint; attempted backends: {}", attempted.join(", "))]
    AllBackendsFailed {
        /// Names of the backends that were attempted, in chain order.
        attempted: Vec<String>,
    },
}

/// Errors that arise from lint configuration installation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The bundled configuration template could not be found.
    #[error("bundled configuration template not found: {}", path.display())]
    TemplateMissing {
        /// Path that was expected to hold the template.
        path: PathBuf,
    },

    /// An I/O error occurred while reading or writing a configuration file.
    #[error("IO error on {path}: {source}")]
    Io {
        /// Path of the file involved.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
