//! Price command implementation.

use super::RangeArgs;
use crate::error::CliError;
use crate::output::write_price;
use crate::utils::{load_configuration, open_facade, output_format, GlobalOptions};
use clap::Args;

/// Quote per-day prices and the total.
#[derive(Args)]
pub struct PriceCommand {
    #[command(flatten)]
    pub range: RangeArgs,
}

impl PriceCommand {
    /// Execute the price command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let facade = open_facade(&config)?;

        let response = facade.quote_price(self.range.from, self.range.to);
        write_price(&mut std::io::stdout().lock(), output_format(&config), &response)
    }
}
