//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, SeedConfig, SeedOccupancy};
use super::validator::ConfigValidator;
use crate::capacity::TOTAL_SPACES;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use std::collections::HashMap;

// Occupancy entries over a two-week window, possibly repeating dates
fn occupancy_strategy() -> impl Strategy<Value = Vec<SeedOccupancy>> {
    prop::collection::vec((0u64..14, 0..=TOTAL_SPACES), 0..10).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(offset, reserved)| SeedOccupancy {
                date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + Days::new(offset),
                reserved,
            })
            .collect()
    })
}

fn seeded(occupancy: Vec<SeedOccupancy>) -> Config {
    Config {
        seed: Some(SeedConfig {
            occupancy,
            reservations: Vec::new(),
        }),
        ..Default::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // Merging a chain of sources yields the last value written for each date
    #[test]
    fn merged_occupancy_is_last_write_wins(layers in prop::collection::vec(occupancy_strategy(), 1..5)) {
        let mut expected = HashMap::new();
        let mut merged = Config::default();

        for layer in &layers {
            for entry in layer {
                expected.insert(entry.date, entry.reserved);
            }
            ConfigMerger::merge_into(&mut merged, &seeded(layer.clone()));
        }

        let seed = merged.seed.unwrap_or_default();
        prop_assert_eq!(seed.occupancy.len(), expected.len());
        for entry in &seed.occupancy {
            prop_assert_eq!(Some(&entry.reserved), expected.get(&entry.date));
        }
    }

    // Merged occupancy never carries duplicate dates, so it always validates
    #[test]
    fn merged_occupancy_validates(layers in prop::collection::vec(occupancy_strategy(), 1..5)) {
        let mut merged = Config::default();
        for layer in layers {
            ConfigMerger::merge_into(&mut merged, &seeded(layer));
        }
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // Config survives a YAML round trip
    #[test]
    fn config_yaml_roundtrip(occupancy in occupancy_strategy(), skip in proptest::option::of(any::<bool>())) {
        let mut config = Config::default();
        ConfigMerger::merge_into(&mut config, &seeded(occupancy));
        config.skip_seed = skip;

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
