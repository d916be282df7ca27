//! Reserve command implementation.
//!
//! The engine lives for one invocation, so a reservation made here is only
//! visible to the rest of this process. Use `batch` to chain requests, or
//! seed reservations through configuration.

use super::RangeArgs;
use crate::error::CliError;
use crate::output::write_reservation_response;
use crate::utils::{load_configuration, open_facade, output_format, GlobalOptions};
use carpark::facade::ReservationResponse;
use clap::Args;

/// Reserve a space for every day in a range.
#[derive(Args)]
pub struct ReserveCommand {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Customer name the reservation is held under
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut facade = open_facade(&config)?;

        let response = facade.reserve(self.range.from, self.range.to, &self.name);
        write_reservation_response(&mut std::io::stdout().lock(), output_format(&config), &response)?;
        into_result(response)
    }
}

/// Turn a rejected reserve or amend into exit status 1.
pub(crate) fn into_result(response: ReservationResponse) -> Result<(), CliError> {
    if response.accepted {
        Ok(())
    } else {
        Err(CliError::SemanticFailure(response.status))
    }
}
