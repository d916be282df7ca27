//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `availability`: Show free spaces per day
//! - `available`: Check whether a whole range can be reserved
//! - `price`: Quote per-day prices and the total
//! - `reserve`: Reserve a space for every day in a range
//! - `amend`: Move an existing reservation to a new range
//! - `cancel`: Cancel a reservation
//! - `list`: List current reservations
//! - `batch`: Run a file of requests against one engine
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod amend;
pub mod availability;
pub mod batch;
pub mod cancel;
pub mod completions;
pub mod list;
pub mod price;
pub mod reserve;
pub mod validate;

pub use amend::AmendCommand;
pub use availability::{AvailabilityCommand, AvailableCommand};
pub use batch::BatchCommand;
pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use price::PriceCommand;
pub use reserve::ReserveCommand;
pub use validate::ValidateCommand;

use crate::utils::parse_date;
use chrono::NaiveDate;
use clap::Args;

/// Inclusive date range shared by the range-based commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct RangeArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub from: NaiveDate,

    /// Last day of the range, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub to: NaiveDate,
}
