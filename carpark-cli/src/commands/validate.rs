//! Command to validate carpark configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use carpark::bootstrap::build_engine;
use carpark::config::{Config, ConfigLoader, ConfigValidator};
use clap::Args;
use std::path::PathBuf;

/// Validate a configuration file.
///
/// Without a file, validates the effective configuration assembled from
/// every discovered source. Seed reservations are test-placed, so a seed
/// that overbooks a day fails validation.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = match self.config_path {
            Some(ref path) => {
                if !path.exists() {
                    return Err(CliError::InvalidArguments(format!(
                        "File not found: {}",
                        path.display()
                    )));
                }
                match ConfigLoader::load_file(path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Parse error: {e}");
                        return Err(CliError::SemanticFailure(
                            "Configuration file is invalid".to_string(),
                        ));
                    }
                }
            }
            None => load_configuration(global)?,
        };

        if global.verbose {
            if let Some(seed) = config.effective_seed() {
                eprintln!(
                    "Seed: {} occupancy entr(ies), {} reservation(s)",
                    seed.occupancy.len(),
                    seed.reservations.len()
                );
            }
        }

        match check(&config) {
            Ok(()) => {
                if !global.quiet {
                    println!("Configuration is valid");
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}

fn check(config: &Config) -> carpark::Result<()> {
    ConfigValidator::validate(config)?;
    build_engine(config).map(|_| ())
}
