//! Availability commands.
//!
//! `availability` prints free spaces for each day; `available` answers
//! whether the whole range could be reserved.

use super::RangeArgs;
use crate::error::CliError;
use crate::output::{write_availability, write_parking_available};
use crate::utils::{load_configuration, open_facade, output_format, GlobalOptions};
use clap::Args;

/// Show free spaces per day.
#[derive(Args)]
pub struct AvailabilityCommand {
    #[command(flatten)]
    pub range: RangeArgs,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let facade = open_facade(&config)?;

        let response = facade.check_availability(self.range.from, self.range.to);
        write_availability(&mut std::io::stdout().lock(), output_format(&config), &response)
    }
}

/// Check whether a whole range can be reserved.
///
/// Exits with status 1 when at least one day is full.
#[derive(Args)]
pub struct AvailableCommand {
    #[command(flatten)]
    pub range: RangeArgs,
}

impl AvailableCommand {
    /// Execute the available command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let facade = open_facade(&config)?;

        let response = facade.is_parking_available(self.range.from, self.range.to);
        write_parking_available(&mut std::io::stdout().lock(), output_format(&config), &response)?;

        if response.is_space_available {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "No space available for every day from {} to {}",
                response.from, response.to
            )))
        }
    }
}
