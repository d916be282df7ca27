//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AmendCommand, AvailabilityCommand, AvailableCommand, BatchCommand, CancelCommand,
    CompletionsCommand, ListCommand, PriceCommand, ReserveCommand, ValidateCommand,
};
use carpark::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for a single car park.
#[derive(Parser)]
#[command(name = "carpark")]
#[command(
    version,
    about = "Check parking availability, quote prices and manage reservations",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "CARPARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the data directory holding config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "CARPARK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Start with empty stores, ignoring configured seed data
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Output format: table, json or csv
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show free spaces per day
    Availability(AvailabilityCommand),

    /// Check whether a whole range can be reserved
    Available(AvailableCommand),

    /// Quote per-day prices and the total
    Price(PriceCommand),

    /// Reserve a space for every day in a range
    Reserve(ReserveCommand),

    /// Move an existing reservation to a new range
    Amend(AmendCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// List current reservations
    List(ListCommand),

    /// Run a file of requests against one engine
    Batch(BatchCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
