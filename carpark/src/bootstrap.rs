//! Composition root.
//!
//! Builds the in-memory stores from configuration and hands them to a fresh
//! engine. Nothing here is process-global; every call returns new state.

use crate::capacity::InMemoryCapacityStore;
use crate::config::{Config, SeedConfig};
use crate::engine::ReservationEngine;
use crate::error::Result;
use crate::facade::RequestFacade;
use crate::pricing::SeasonalPricing;
use crate::store::InMemoryReservationStore;
use crate::DateRange;

/// Builds an engine seeded from `config`.
///
/// Seed occupancy is loaded first. Seed reservations are then placed through
/// [`ReservationEngine::reserve_parking`], so they claim capacity like any
/// other reservation.
///
/// # Errors
///
/// Returns the engine error for the first seed reservation that cannot be
/// placed.
///
/// # Examples
///
/// ```
/// use carpark::bootstrap::build_engine;
/// use carpark::config::Config;
///
/// let yaml = "seed:\n  reservations:\n    - {name: Ian Richards, from: 2023-01-01, to: 2023-01-06}\n";
/// let engine = build_engine(&Config::from_yaml(yaml).unwrap()).unwrap();
/// assert_eq!(engine.get_reservations().len(), 1);
/// ```
pub fn build_engine(config: &Config) -> Result<ReservationEngine> {
    match config.effective_seed() {
        Some(seed) => seed_engine(seed),
        None => Ok(ReservationEngine::in_memory()),
    }
}

/// Builds a request facade over [`build_engine`].
///
/// # Errors
///
/// See [`build_engine`].
pub fn build_facade(config: &Config) -> Result<RequestFacade> {
    build_engine(config).map(RequestFacade::new)
}

fn seed_engine(seed: &SeedConfig) -> Result<ReservationEngine> {
    let capacity = InMemoryCapacityStore::with_occupancy(
        seed.occupancy.iter().map(|entry| (entry.date, entry.reserved)),
    );
    let mut engine = ReservationEngine::new(
        capacity,
        InMemoryReservationStore::new(),
        SeasonalPricing,
    );

    for entry in &seed.reservations {
        let range = DateRange::new(entry.from, entry.to)?;
        engine.reserve_parking(range, &entry.name)?;
    }

    log::debug!(
        "Seeded {} occupancy entries and {} reservations",
        seed.occupancy.len(),
        seed.reservations.len()
    );
    Ok(engine)
}
