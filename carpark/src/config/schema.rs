//! Configuration schema definitions.
//!
//! Apart from output preferences, the configuration carries the seed data the
//! composition root loads into the in-memory stores at startup: pre-existing
//! occupancy per day, and reservations already on the books.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use carpark::config::{Config, OutputFormat};
///
/// let config = Config::from_yaml("output_format: json\n").unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// assert!(config.seed.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,

    /// Start with empty stores even when seed data is configured.
    pub skip_seed: Option<bool>,

    /// Fixture data loaded into the stores at startup.
    pub seed: Option<SeedConfig>,
}

impl Config {
    /// Parses a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if the YAML is malformed or
    /// contains unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Returns the seed data to load, or `None` when seeding is disabled.
    #[must_use]
    pub fn effective_seed(&self) -> Option<&SeedConfig> {
        if self.skip_seed.unwrap_or(false) {
            None
        } else {
            self.seed.as_ref()
        }
    }
}

/// Startup fixture data.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Spaces already taken per day, independent of named reservations.
    #[serde(default)]
    pub occupancy: Vec<SeedOccupancy>,

    /// Reservations placed through the engine after occupancy is loaded.
    #[serde(default)]
    pub reservations: Vec<SeedReservation>,
}

impl SeedConfig {
    /// Returns `true` if there is nothing to load.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty() && self.reservations.is_empty()
    }
}

/// Pre-existing occupancy for one day.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SeedOccupancy {
    /// The day.
    pub date: NaiveDate,
    /// Number of spaces already taken.
    pub reserved: i32,
}

/// A reservation present at startup.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SeedReservation {
    /// Customer name.
    pub name: String,
    /// First reserved day.
    pub from: NaiveDate,
    /// Last reserved day.
    pub to: NaiveDate,
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use carpark::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Csv.to_string(), "csv");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
