//! Cancel command implementation.

use crate::error::CliError;
use crate::output::write_cancellation;
use crate::utils::{load_configuration, open_facade, output_format, GlobalOptions};
use clap::Args;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Customer name the reservation is held under
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut facade = open_facade(&config)?;

        let response = facade.cancel(&self.name);
        write_cancellation(&mut std::io::stdout().lock(), output_format(&config), &response)?;

        if response.accepted {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(response.status))
        }
    }
}
