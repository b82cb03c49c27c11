use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the lint setup tool.
#[derive(Parser, Debug)]
#[command(
    name = "lintsetup",
    about = "golangci-lint installer and Go project configurator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview changes without applying
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Override the bundled configuration template path
    #[arg(long, global = true)]
    pub template: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install golangci-lint and wire it into a Go project
    Install(InstallOpts),
    /// Report the lint setup state of a project without changing it
    Check(CheckOpts),
    /// Generate shell completions
    Completions(CompletionsOpts),
    /// Print version information
    Version,
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct InstallOpts {
    /// Target Go project directory (defaults to the current directory)
    pub project_root: Option<PathBuf>,

    /// Install the pre-commit hook without asking
    #[arg(long, conflicts_with = "no_hook")]
    pub hook: bool,

    /// Never install the pre-commit hook
    #[arg(long)]
    pub no_hook: bool,

    /// Skip specific tasks
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific tasks
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

/// Options for the `check` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CheckOpts {
    /// Target Go project directory (defaults to the current directory)
    pub project_root: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for the `completions` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct CompletionsOpts {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install_defaults() {
        let cli = Cli::parse_from(["lintsetup", "install"]);
        assert!(matches!(cli.command, Command::Install(_)));
        assert!(!cli.verbose);
        assert!(!cli.global.dry_run);
    }

    #[test]
    fn parse_install_with_project_root() {
        let cli = Cli::parse_from(["lintsetup", "install", "/src/myproject"]);
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.project_root, Some(PathBuf::from("/src/myproject")));
        } else {
            panic!("expected install command");
        }
    }

    #[test]
    fn parse_install_dry_run() {
        let cli = Cli::parse_from(["lintsetup", "--dry-run", "install"]);
        assert!(cli.global.dry_run);
        let cli = Cli::parse_from(["lintsetup", "-d", "install"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn parse_install_hook_flags() {
        let cli = Cli::parse_from(["lintsetup", "install", "--hook"]);
        if let Command::Install(opts) = cli.command {
            assert!(opts.hook);
            assert!(!opts.no_hook);
        } else {
            panic!("expected install command");
        }

        let cli = Cli::parse_from(["lintsetup", "install", "--no-hook"]);
        if let Command::Install(opts) = cli.command {
            assert!(opts.no_hook);
        } else {
            panic!("expected install command");
        }
    }

    #[test]
    fn hook_flags_conflict() {
        assert!(Cli::try_parse_from(["lintsetup", "install", "--hook", "--no-hook"]).is_err());
    }

    #[test]
    fn parse_install_skip_tasks() {
        let cli = Cli::parse_from(["lintsetup", "install", "--skip", "makefile,hook"]);
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.skip, vec!["makefile", "hook"]);
        } else {
            panic!("expected install command");
        }
    }

    #[test]
    fn parse_install_only_tasks() {
        let cli = Cli::parse_from(["lintsetup", "install", "--only", "config"]);
        if let Command::Install(opts) = cli.command {
            assert_eq!(opts.only, vec!["config"]);
        } else {
            panic!("expected install command");
        }
    }

    #[test]
    fn parse_template_override() {
        let cli = Cli::parse_from(["lintsetup", "--template", "/etc/lint.yml", "install"]);
        assert_eq!(cli.global.template, Some(PathBuf::from("/etc/lint.yml")));
    }

    #[test]
    fn parse_check_json() {
        let cli = Cli::parse_from(["lintsetup", "check", "--json", "/src/proj"]);
        if let Command::Check(opts) = cli.command {
            assert!(opts.json);
            assert_eq!(opts.project_root, Some(PathBuf::from("/src/proj")));
        } else {
            panic!("expected check command");
        }
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["lintsetup", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::parse_from(["lintsetup", "-v", "check"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_completions() {
        let cli = Cli::parse_from(["lintsetup", "completions", "bash"]);
        assert!(matches!(cli.command, Command::Completions(_)));
    }
}
