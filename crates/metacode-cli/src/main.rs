//! `pymeta`: create Python packages and grow them with modules, classes,
//! functions, subpackages and a Qt GUI. Existing files are never
//! overwritten; anything already present is reported and skipped.
//!
//! Exit codes: 0 success (including printed help), 1 internal error,
//! 2 usage or precondition error, 3 not found, 4 configuration error.

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, instrument};

use crate::{
    cli::{Cli, Command, Parsed},
    commands::Workspace,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    if let Err(e) = logging::init_logging(&cli.global) {
        eprintln!("pymeta: {e:#}");
        return ExitCode::from(1);
    }
    debug!(directory = %cli.global.directory.display(), words = ?cli.words, "starting");

    let reporter = ErrorReporter {
        verbose: cli.global.verbose > 0,
        color: !cli.global.no_color && std::io::stderr().is_terminal(),
    };

    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(config) => config,
        Err(e) => return reporter.report(e.into()),
    };
    let output = OutputManager::new(&cli.global, &config);

    match run(&cli, &config, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => reporter.report(e),
    }
}

#[instrument(skip_all)]
fn run(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let command = match cli.parsed() {
        Parsed::Help(topic) => return commands::help::execute(topic, output),
        Parsed::Run(command) => command,
    };

    let workspace = Workspace::new(&cli.global, config);
    match command {
        Command::WriteConfig { destination } => commands::write::execute(&destination, &workspace, output),
        Command::CreatePackage { configuration } => {
            commands::create::execute(&configuration, &workspace, output)
        }
        Command::Add(add) => commands::add::execute(add, &workspace, output),
        Command::Completions { shell } => commands::completions::execute(shell),
    }
}

/// Prints a failed command's error to stderr.
struct ErrorReporter {
    verbose: bool,
    color: bool,
}

impl ErrorReporter {
    fn report(&self, err: CliError) -> ExitCode {
        err.log();
        let message = if self.color {
            err.format_colored(self.verbose)
        } else {
            err.format_plain(self.verbose)
        };
        eprint!("{message}");
        ExitCode::from(err.exit_code())
    }
}
