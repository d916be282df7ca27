//! List command implementation.
//!
//! Shows the reservations present at startup, i.e. the seeded ones.

use crate::error::CliError;
use crate::output::write_reservations;
use crate::utils::{load_configuration, open_facade, output_format, GlobalOptions};
use clap::Args;

/// List current reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Only show reservations whose name contains this text (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub filter_name: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let facade = open_facade(&config)?;

        let mut reservations = facade.list_reservations();
        if let Some(ref needle) = self.filter_name {
            let needle = needle.to_lowercase();
            reservations.retain(|r| r.name().to_lowercase().contains(&needle));
        }

        write_reservations(&mut std::io::stdout().lock(), output_format(&config), &reservations)
    }
}
