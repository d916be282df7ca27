//! Per-day parking capacity tracking.
//!
//! The capacity store is a plain occupancy counter keyed by calendar day. It
//! knows nothing about reservations; the engine is responsible for calling
//! [`CapacityStore::reserve_space`] and [`CapacityStore::deallocate_space`] in
//! matched pairs.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Total number of spaces available on any single day.
pub const TOTAL_SPACES: i32 = 10;

/// Free spaces on one day, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpaceAvailability {
    /// The day being reported.
    pub date: NaiveDate,
    /// `TOTAL_SPACES` minus the day's occupancy.
    pub spaces_available: i32,
}

/// Trait for per-day occupancy bookkeeping.
///
/// Abstracted so the engine can be exercised against mock stores.
#[cfg_attr(test, mockall::automock)]
pub trait CapacityStore {
    /// Returns `true` if at least one space is free on `date`.
    fn is_space_available(&self, date: NaiveDate) -> bool;

    /// Claims one space on `date`.
    fn reserve_space(&mut self, date: NaiveDate);

    /// Releases one space on `date`.
    ///
    /// There is no floor check: releasing a day that was never reserved drives
    /// its occupancy negative.
    fn deallocate_space(&mut self, date: NaiveDate);

    /// Returns the number of free spaces on `date`.
    fn get_spaces_available(&self, date: NaiveDate) -> i32;

    /// Returns the number of occupied spaces on `date`.
    fn occupancy(&self, date: NaiveDate) -> i32 {
        TOTAL_SPACES - self.get_spaces_available(date)
    }
}

/// In-memory occupancy map.
///
/// Days that were never touched are fully available.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use carpark::capacity::{CapacityStore, InMemoryCapacityStore, TOTAL_SPACES};
///
/// let day = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
/// let mut store = InMemoryCapacityStore::new();
/// assert_eq!(store.get_spaces_available(day), TOTAL_SPACES);
///
/// store.reserve_space(day);
/// assert_eq!(store.get_spaces_available(day), TOTAL_SPACES - 1);
///
/// store.deallocate_space(day);
/// assert_eq!(store.occupancy(day), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCapacityStore {
    occupancy: HashMap<NaiveDate, i32>,
}

impl InMemoryCapacityStore {
    /// Creates an empty store (every day fully available).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with occupancy counts.
    ///
    /// Later entries for the same day replace earlier ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use carpark::capacity::{CapacityStore, InMemoryCapacityStore};
    ///
    /// let day = NaiveDate::from_ymd_opt(2023, 1, 3).unwrap();
    /// let store = InMemoryCapacityStore::with_occupancy([(day, 10)]);
    /// assert!(!store.is_space_available(day));
    /// ```
    #[must_use]
    pub fn with_occupancy(entries: impl IntoIterator<Item = (NaiveDate, i32)>) -> Self {
        Self {
            occupancy: entries.into_iter().collect(),
        }
    }

    /// Returns the days that currently have an occupancy entry, in chronological order.
    #[must_use]
    pub fn tracked_dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<_> = self.occupancy.keys().copied().collect();
        dates.sort_unstable();
        dates
    }

    fn count(&self, date: NaiveDate) -> i32 {
        self.occupancy.get(&date).copied().unwrap_or(0)
    }
}

impl CapacityStore for InMemoryCapacityStore {
    fn is_space_available(&self, date: NaiveDate) -> bool {
        self.count(date) < TOTAL_SPACES
    }

    fn reserve_space(&mut self, date: NaiveDate) {
        *self.occupancy.entry(date).or_insert(0) += 1;
    }

    fn deallocate_space(&mut self, date: NaiveDate) {
        *self.occupancy.entry(date).or_insert(0) -= 1;
    }

    fn get_spaces_available(&self, date: NaiveDate) -> i32 {
        TOTAL_SPACES - self.count(date)
    }

    fn occupancy(&self, date: NaiveDate) -> i32 {
        self.count(date)
    }
}
