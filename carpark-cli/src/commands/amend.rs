//! Amend command implementation.

use super::reserve::into_result;
use super::RangeArgs;
use crate::error::CliError;
use crate::output::write_reservation_response;
use crate::utils::{load_configuration, open_facade, output_format, GlobalOptions};
use clap::Args;

/// Move an existing reservation to a new range.
///
/// The reservation must already exist in this process, which in practice
/// means it came from seed data.
#[derive(Args)]
pub struct AmendCommand {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Customer name the reservation is held under
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

impl AmendCommand {
    /// Execute the amend command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut facade = open_facade(&config)?;

        let response = facade.amend(self.range.from, self.range.to, &self.name);
        write_reservation_response(&mut std::io::stdout().lock(), output_format(&config), &response)?;
        into_result(response)
    }
}
