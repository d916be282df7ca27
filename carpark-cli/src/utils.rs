//! Utility functions for CLI operations.
//!
//! Global options, date parsing, and the path from configuration to a ready
//! request facade.

use crate::error::CliError;
use carpark::bootstrap::build_facade;
use carpark::config::{default_data_dir, Config, ConfigBuilder, OutputFormat};
use carpark::RequestFacade;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Date format accepted on the command line and in batch files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Extra configuration file loaded above the discovered ones.
    pub config: Option<PathBuf>,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Ignore configured seed data.
    pub no_seed: bool,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,
}

/// Parse a `YYYY-MM-DD` date.
///
/// Used as a clap value parser, so the error is a plain message.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| format!("invalid date '{value}' (expected YYYY-MM-DD): {e}"))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = match global.data_dir {
        Some(ref dir) => dir.clone(),
        None => default_data_dir().map_err(CliError::from)?,
    };

    let mut builder = ConfigBuilder::new().with_data_dir(data_dir);

    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "File not found: {}",
                path.display()
            )));
        }
        builder = builder.with_config_file(path);
    }

    let overrides = Config {
        output_format: global.format,
        skip_seed: global.no_seed.then_some(true),
        seed: None,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a request facade seeded from the effective configuration.
///
/// A seed reservation that cannot be placed is a configuration error.
pub fn open_facade(config: &Config) -> Result<RequestFacade, CliError> {
    build_facade(config).map_err(|e| CliError::Config(format!("seed data rejected: {e}")))
}

/// Resolve the output format, falling back to the table format.
pub fn output_format(config: &Config) -> OutputFormat {
    config.output_format.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2023-01-04"),
            Ok(NaiveDate::from_ymd_opt(2023, 1, 4).unwrap())
        );
        assert!(parse_date("04/01/2023").is_err());
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let global = GlobalOptions {
            config: Some(PathBuf::from("/definitely/not/here.yaml")),
            data_dir: Some(PathBuf::from("/definitely/not/here")),
            ..Default::default()
        };
        let err = load_configuration(&global).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }
}
