//! Named reservation storage.
//!
//! The store keys reservations by customer name. It performs no capacity
//! bookkeeping; the engine pairs every store mutation with the matching
//! capacity change.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::Reservation;

/// Trait for reservation record storage.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Returns every stored reservation keyed by name.
    fn get_reservations(&self) -> &HashMap<String, Reservation>;

    /// Inserts a reservation unless its name is already taken.
    ///
    /// A duplicate name is ignored and the existing record is kept.
    fn add_reservation(&mut self, reservation: Reservation);

    /// Returns `true` if a reservation exists under `name`.
    fn reservation_exists(&self, name: &str) -> bool;

    /// Looks up a reservation by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if no reservation is stored under
    /// `name`.
    fn get_reservation_by_name(&self, name: &str) -> Result<Reservation>;

    /// Removes the reservation stored under `name`, if any.
    fn remove_reservation(&mut self, name: &str);
}

/// Hash-map backed reservation store.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use carpark::{DateRange, Reservation};
/// use carpark::store::{InMemoryReservationStore, ReservationStore};
///
/// let day = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// let mut store = InMemoryReservationStore::new();
/// store.add_reservation(Reservation::new("Ian Richards", DateRange::single(day)).unwrap());
///
/// assert!(store.reservation_exists("Ian Richards"));
/// assert!(store.get_reservation_by_name("Bob Johnson").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationStore {
    reservations: HashMap<String, Reservation>,
}

impl InMemoryReservationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

impl ReservationStore for InMemoryReservationStore {
    fn get_reservations(&self) -> &HashMap<String, Reservation> {
        &self.reservations
    }

    fn add_reservation(&mut self, reservation: Reservation) {
        self.reservations
            .entry(reservation.name().to_string())
            .or_insert(reservation);
    }

    fn reservation_exists(&self, name: &str) -> bool {
        self.reservations.contains_key(name)
    }

    fn get_reservation_by_name(&self, name: &str) -> Result<Reservation> {
        self.reservations
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ReservationNotFound {
                name: name.to_string(),
            })
    }

    fn remove_reservation(&mut self, name: &str) {
        self.reservations.remove(name);
    }
}
