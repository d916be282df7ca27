//! Property-based tests for the reservation engine.

use super::ReservationEngine;
use crate::capacity::{CapacityStore, InMemoryCapacityStore, TOTAL_SPACES};
use crate::pricing::SeasonalPricing;
use crate::store::InMemoryReservationStore;
use crate::DateRange;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;

const WINDOW: usize = 30;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
}

fn day(offset: usize) -> NaiveDate {
    base() + Days::new(offset as u64)
}

// Occupancy for each day of a 30-day window starting 2023-01-01
fn occupancy_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..=TOTAL_SPACES, WINDOW)
}

// Offsets (start, end) inside the window with start <= end
fn span_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0..WINDOW).prop_flat_map(|start| (Just(start), start..WINDOW))
}

fn engine_with(occupancy: &[i32]) -> ReservationEngine {
    let seeded = occupancy
        .iter()
        .enumerate()
        .map(|(offset, &count)| (day(offset), count));
    ReservationEngine::new(
        InMemoryCapacityStore::with_occupancy(seeded),
        InMemoryReservationStore::new(),
        SeasonalPricing,
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Availability holds only when every single day has room
    #[test]
    fn availability_is_conjunction(occupancy in occupancy_strategy(), (start, end) in span_strategy()) {
        let engine = engine_with(&occupancy);
        let range = DateRange::new(day(start), day(end)).unwrap();

        let expected = occupancy[start..=end].iter().all(|&count| count < TOTAL_SPACES);
        prop_assert_eq!(engine.is_parking_available(range), expected);
    }

    // Reserve followed by cancel restores every day's occupancy
    #[test]
    fn reserve_then_cancel_restores_capacity(
        occupancy in prop::collection::vec(0..TOTAL_SPACES, WINDOW),
        (start, end) in span_strategy(),
    ) {
        let mut engine = engine_with(&occupancy);
        let range = DateRange::new(day(start), day(end)).unwrap();

        engine.reserve_parking(range, "Bill Gates").unwrap();
        for offset in start..=end {
            prop_assert_eq!(engine.capacity().occupancy(day(offset)), occupancy[offset] + 1);
        }

        engine.cancel_reservation("Bill Gates").unwrap();
        for (offset, &count) in occupancy.iter().enumerate() {
            prop_assert_eq!(engine.capacity().occupancy(day(offset)), count);
        }
        prop_assert!(engine.get_reservations().is_empty());
    }

    // A rejected reservation never changes occupancy
    #[test]
    fn rejected_reserve_mutates_nothing(occupancy in occupancy_strategy(), (start, end) in span_strategy()) {
        let mut engine = engine_with(&occupancy);
        let range = DateRange::new(day(start), day(end)).unwrap();

        if engine.reserve_parking(range, "Steve Jobs").is_err() {
            for (offset, &count) in occupancy.iter().enumerate() {
                prop_assert_eq!(engine.capacity().occupancy(day(offset)), count);
            }
            prop_assert!(engine.get_reservations().is_empty());
        }
    }

    // Price of a range equals the sum of its two halves
    #[test]
    fn total_price_is_additive(start in 0usize..365, len in 1usize..60, split in 0usize..60) {
        let engine = ReservationEngine::in_memory();
        let split = split % len;
        let first = DateRange::new(day(start), day(start + split)).unwrap();
        let whole = DateRange::new(day(start), day(start + len)).unwrap();
        let rest = DateRange::new(day(start + split + 1), day(start + len)).unwrap();

        prop_assert_eq!(
            engine.get_total_price(whole),
            engine.get_total_price(first) + engine.get_total_price(rest)
        );
        let quotes = engine.get_parking_prices_for_date_range(whole);
        prop_assert_eq!(quotes.len(), whole.len());
    }

    // After an amendment only the new range holds capacity
    #[test]
    fn amend_moves_capacity(
        (start, end) in span_strategy(),
        (new_start, new_end) in span_strategy(),
    ) {
        let mut engine = engine_with(&[0; WINDOW]);
        let old = DateRange::new(day(start), day(end)).unwrap();
        let new = DateRange::new(day(new_start), day(new_end)).unwrap();

        engine.reserve_parking(old, "Ian Richards").unwrap();
        engine.amend_reservation(new, "Ian Richards").unwrap();

        for offset in 0..WINDOW {
            let expected = i32::from(new.contains(day(offset)));
            prop_assert_eq!(engine.capacity().occupancy(day(offset)), expected);
        }
    }
}
