//! Main entry point for the carpark CLI.
//!
//! Each invocation builds fresh in-memory stores from configuration, answers
//! one request (or a `batch` of them), and exits.

mod cli;
mod commands;
mod error;
mod output;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = carpark::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        data_dir: cli.data_dir,
        no_seed: cli.no_seed,
        format: cli.format,
    };

    let result = match cli.command {
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::Available(cmd) => cmd.execute(&global),
        cli::Command::Price(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Amend(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Batch(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
