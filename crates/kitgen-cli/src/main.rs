//! `kitgen`: writes the ACME Pharmacy Analytics spec kit to disk.
//!
//! Running with no arguments is the whole job: every kit file is written
//! under `./acme-pharmacy-analytics-spec`, one `✓ Created:` line per file,
//! followed by a summary.  Subcommands exist for listing the kit, shell
//! completions and config inspection.
//!
//! Exit codes: 0 success, 1 internal or filesystem failure, 2 bad input,
//! 3 manifest file not found, 4 configuration error.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    config::AppConfig,
    error::{CliResult, RenderOptions},
    logging::init_logging,
    output::{OutputManager, use_color},
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Also reached for --help and --version, which exit 0.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("{e}");
        return ExitCode::from(1);
    }

    let mut render = RenderOptions {
        verbose: cli.global.verbose > 0,
        color: use_color(&cli.global, &AppConfig::default(), std::io::stderr().is_terminal()),
    };

    let result = cli.into_command().and_then(|(global, command)| {
        let config = AppConfig::load(global.config.as_ref())?;
        render.color = use_color(&global, &config, std::io::stderr().is_terminal());
        run(&global, command, config)
    });

    match result {
        Ok(()) => {
            info!("kitgen finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.log();
            eprint!("{}", err.render(render));
            ExitCode::from(err.exit_code())
        }
    }
}

#[instrument(skip_all)]
fn run(global: &GlobalArgs, command: Commands, config: AppConfig) -> CliResult<()> {
    let output = OutputManager::new(global, &config);

    debug!(
        ?command,
        quiet = output.is_quiet(),
        color = output.supports_color(),
        format = ?output.format(),
        "dispatching"
    );

    match command {
        Commands::Generate(args) => commands::generate::execute(args, config, output),
        Commands::List(args) => commands::list::execute(args, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_metadata_comes_from_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "kitgen");
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
        assert!(cmd.get_author().is_some());
    }
}
