//! Common test utilities for integration tests.
//!
//! Provides date helpers and a fixture builder for engines pre-loaded with
//! occupancy and reservations.

use chrono::NaiveDate;

use carpark::config::{Config, SeedConfig, SeedOccupancy, SeedReservation};
use carpark::{
    DateRange, InMemoryCapacityStore, InMemoryReservationStore, ReservationEngine, SeasonalPricing,
};

/// Occupancy for the first ten days of January 2023 used across the suite.
#[allow(dead_code)]
pub const JANUARY_OCCUPANCY: [(u32, i32); 10] = [
    (1, 9),
    (2, 8),
    (3, 10),
    (4, 9),
    (5, 7),
    (6, 0),
    (7, 0),
    (8, 0),
    (9, 0),
    (10, 1),
];

/// Shorthand for a valid calendar day.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Shorthand for a valid range.
#[allow(dead_code)]
pub fn range(from: NaiveDate, to: NaiveDate) -> DateRange {
    DateRange::new(from, to).unwrap()
}

/// Builder for engines with sensible fixture defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::EngineFixture;
/// let engine = EngineFixture::january().with_reservation("Ian Richards", (1, 1), (1, 6)).build();
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct EngineFixture {
    occupancy: Vec<(NaiveDate, i32)>,
    reservations: Vec<(String, NaiveDate, NaiveDate)>,
}

#[allow(dead_code)]
impl EngineFixture {
    /// Creates a fixture with no occupancy and no reservations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fixture with the January 2023 occupancy.
    pub fn january() -> Self {
        let mut fixture = Self::new();
        for (day, reserved) in JANUARY_OCCUPANCY {
            fixture = fixture.with_occupancy(date(2023, 1, day), reserved);
        }
        fixture
    }

    /// Sets the occupancy of one day.
    pub fn with_occupancy(mut self, day: NaiveDate, reserved: i32) -> Self {
        self.occupancy.push((day, reserved));
        self
    }

    /// Adds a 2023 reservation given as `(month, day)` pairs.
    pub fn with_reservation(mut self, name: &str, from: (u32, u32), to: (u32, u32)) -> Self {
        self.reservations.push((
            name.to_string(),
            date(2023, from.0, from.1),
            date(2023, to.0, to.1),
        ));
        self
    }

    /// Builds the engine, placing reservations through the engine itself.
    pub fn build(self) -> ReservationEngine {
        let mut engine = ReservationEngine::new(
            InMemoryCapacityStore::with_occupancy(self.occupancy),
            InMemoryReservationStore::new(),
            SeasonalPricing,
        );
        for (name, from, to) in self.reservations {
            engine
                .reserve_parking(range(from, to), &name)
                .expect("fixture reservation should fit");
        }
        engine
    }

    /// Expresses the fixture as configuration seed data.
    pub fn into_config(self) -> Config {
        Config {
            seed: Some(SeedConfig {
                occupancy: self
                    .occupancy
                    .into_iter()
                    .map(|(date, reserved)| SeedOccupancy { date, reserved })
                    .collect(),
                reservations: self
                    .reservations
                    .into_iter()
                    .map(|(name, from, to)| SeedReservation { name, from, to })
                    .collect(),
            }),
            ..Default::default()
        }
    }
}
