//! Environment variable handling for configuration overrides.
//!
//! `CARPARK_*` variables override file values and are overridden only by
//! programmatic configuration.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Variable selecting the output format.
pub const OUTPUT_FORMAT_ENV: &str = "CARPARK_OUTPUT_FORMAT";

/// Variable disabling seed data.
pub const SKIP_SEED_ENV: &str = "CARPARK_SKIP_SEED";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use carpark::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies every recognised `CARPARK_*` variable to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unrecognised value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            let format = val.parse::<OutputFormat>().map_err(|_| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message: format!("Must be one of table, json, csv (got '{val}')"),
            })?;
            config.output_format = Some(format);
        }

        if let Ok(val) = env::var(SKIP_SEED_ENV) {
            config.skip_seed = Some(Self::parse_bool(SKIP_SEED_ENV, &val)?);
        }

        Ok(())
    }

    /// Parses a boolean environment value.
    ///
    /// Accepts `true/1/yes/on` and `false/0/no/off`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error for any other value.
    pub fn parse_bool(var: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: var.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        env::remove_var(OUTPUT_FORMAT_ENV);
        env::remove_var(SKIP_SEED_ENV);
    }

    #[test]
    fn test_parse_bool() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("X", value).unwrap());
        }
        for value in ["false", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("X", value).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("X", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config() {
        clear();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_output_format_override() {
        clear();
        env::set_var(OUTPUT_FORMAT_ENV, "json");

        let mut config = Config {
            output_format: Some(OutputFormat::Table),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));

        clear();
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear();
        env::set_var(OUTPUT_FORMAT_ENV, "xml");

        let err = EnvironmentConfig::apply_overrides(&mut Config::default()).unwrap_err();
        assert!(err.to_string().contains(OUTPUT_FORMAT_ENV));

        clear();
    }

    #[test]
    #[serial]
    fn test_skip_seed_override() {
        clear();
        env::set_var(SKIP_SEED_ENV, "yes");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.skip_seed, Some(true));

        clear();
    }
}
