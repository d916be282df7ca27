//! Configuration validation.

use std::collections::HashSet;

use crate::capacity::TOTAL_SPACES;
use crate::config::schema::{Config, SeedConfig, SeedOccupancy, SeedReservation};
use crate::error::{Error, Result};
use crate::reservation::normalize_name;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use carpark::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config::from_yaml("seed:\n  occupancy:\n    - {date: 2023-01-01, reserved: 11}\n").unwrap();
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref seed) = config.seed {
            Self::validate_seed(seed)?;
        }
        Ok(())
    }

    fn validate_seed(seed: &SeedConfig) -> Result<()> {
        let mut dates = HashSet::new();
        for (index, entry) in seed.occupancy.iter().enumerate() {
            Self::validate_occupancy(index, entry)?;
            if !dates.insert(entry.date) {
                return Err(Error::Validation {
                    field: format!("seed.occupancy[{index}].date"),
                    message: format!("Duplicate occupancy entry for {}", entry.date),
                });
            }
        }

        let mut names = HashSet::new();
        for (index, entry) in seed.reservations.iter().enumerate() {
            let name = Self::validate_reservation(index, entry)?;
            if !names.insert(name) {
                return Err(Error::Validation {
                    field: format!("seed.reservations[{index}].name"),
                    message: format!("Duplicate reservation name '{}'", entry.name.trim()),
                });
            }
        }

        Ok(())
    }

    fn validate_occupancy(index: usize, entry: &SeedOccupancy) -> Result<()> {
        if !(0..=TOTAL_SPACES).contains(&entry.reserved) {
            return Err(Error::Validation {
                field: format!("seed.occupancy[{index}].reserved"),
                message: format!(
                    "Must be between 0 and {TOTAL_SPACES} (got {})",
                    entry.reserved
                ),
            });
        }
        Ok(())
    }

    fn validate_reservation(index: usize, entry: &SeedReservation) -> Result<String> {
        let name = normalize_name(&entry.name).ok_or_else(|| Error::Validation {
            field: format!("seed.reservations[{index}].name"),
            message: "Cannot be empty or only whitespace".into(),
        })?;

        if entry.to < entry.from {
            return Err(Error::Validation {
                field: format!("seed.reservations[{index}]"),
                message: format!(
                    "End date {} precedes start date {}",
                    entry.to, entry.from
                ),
            });
        }

        Ok(name)
    }
}
