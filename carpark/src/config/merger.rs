//! Configuration merging and precedence handling.
//!
//! Scalars are overwritten by higher-precedence sources. Seed data
//! accumulates: occupancy is keyed by date and reservations by name, and a
//! later source replaces an earlier entry with the same key.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, SeedConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use carpark::config::{Config, ConfigMerger, OutputFormat};
///
/// let mut result = Config { output_format: Some(OutputFormat::Table), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Json));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merges sources given in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merges `source` into `target`; `source` wins on conflicts.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.skip_seed.is_some() {
            target.skip_seed = source.skip_seed;
        }

        if let Some(ref source_seed) = source.seed {
            let target_seed = target.seed.get_or_insert_with(SeedConfig::default);
            Self::merge_seed(target_seed, source_seed);
        }
    }

    fn merge_seed(target: &mut SeedConfig, source: &SeedConfig) {
        for entry in &source.occupancy {
            match target.occupancy.iter_mut().find(|e| e.date == entry.date) {
                Some(existing) => *existing = *entry,
                None => target.occupancy.push(*entry),
            }
        }

        for entry in &source.reservations {
            match target
                .reservations
                .iter_mut()
                .find(|e| e.name.trim() == entry.name.trim())
            {
                Some(existing) => existing.clone_from(entry),
                None => target.reservations.push(entry.clone()),
            }
        }
    }
}
