use anyhow::Result;
use clap::Parser;

use lintsetup_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);

    match args.command {
        cli::Command::Install(opts) => commands::install::run(&args.global, &opts),
        cli::Command::Check(opts) => commands::check::run(&args.global, &opts),
        cli::Command::Completions(opts) => {
            use clap::CommandFactory as _;
            let mut cmd = cli::Cli::command();
            clap_complete::generate(opts.shell, &mut cmd, "lintsetup", &mut std::io::stdout());
            Ok(())
        }
        cli::Command::Version => {
            let version = option_env!("LINTSETUP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("lintsetup {version}");
            Ok(())
        }
    }
}
