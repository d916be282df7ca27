//! Reservation engine.
//!
//! The engine owns the three stores and is the only component that mutates
//! them. Every mutation validates the whole request before touching any state,
//! so a rejected request leaves capacity and reservations exactly as they were.
//!
//! # Reservation lifecycle
//!
//! A name moves between two states:
//!
//! - Unreserved → [`reserve_parking`](ReservationEngine::reserve_parking) → Reserved
//! - Reserved → [`cancel_reservation`](ReservationEngine::cancel_reservation) → Unreserved
//! - Reserved → [`amend_reservation`](ReservationEngine::amend_reservation) → Reserved
//!
//! Capacity is claimed once per day on reserve and released once per day on
//! cancel; an amendment releases the old days and claims the new ones.

use rust_decimal::Decimal;

use crate::capacity::{CapacityStore, InMemoryCapacityStore, SpaceAvailability};
use crate::error::{Error, Result};
use crate::pricing::{PriceQuote, PricingEngine, SeasonalPricing};
use crate::reservation::normalize_name;
use crate::store::{InMemoryReservationStore, ReservationStore};
use crate::{DateRange, Reservation};

#[cfg(test)]
mod proptests;

/// Orchestrates capacity, pricing and reservation records.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use carpark::{DateRange, ReservationEngine};
///
/// let mut engine = ReservationEngine::in_memory();
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 2, 3).unwrap(),
/// ).unwrap();
///
/// engine.reserve_parking(range, "Bill Gates").unwrap();
/// assert_eq!(engine.get_space_availabilities(range)[0].spaces_available, 9);
///
/// engine.cancel_reservation("Bill Gates").unwrap();
/// assert_eq!(engine.get_space_availabilities(range)[0].spaces_available, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ReservationEngine<
    C = InMemoryCapacityStore,
    R = InMemoryReservationStore,
    P = SeasonalPricing,
> {
    capacity: C,
    reservations: R,
    pricing: P,
}

impl ReservationEngine {
    /// Creates an engine over empty in-memory stores with the standard pricing rule.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            InMemoryCapacityStore::new(),
            InMemoryReservationStore::new(),
            SeasonalPricing,
        )
    }
}

impl Default for ReservationEngine {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<C, R, P> ReservationEngine<C, R, P>
where
    C: CapacityStore,
    R: ReservationStore,
    P: PricingEngine,
{
    /// Creates an engine over the given stores.
    #[must_use]
    pub const fn new(capacity: C, reservations: R, pricing: P) -> Self {
        Self {
            capacity,
            reservations,
            pricing,
        }
    }

    /// Returns the capacity store.
    #[must_use]
    pub const fn capacity(&self) -> &C {
        &self.capacity
    }

    /// Returns the reservation store.
    #[must_use]
    pub const fn reservation_store(&self) -> &R {
        &self.reservations
    }

    /// Returns `true` only if every day in `range` has a free space.
    ///
    /// Stops at the first full day.
    pub fn is_parking_available(&self, range: DateRange) -> bool {
        range.days().all(|day| self.capacity.is_space_available(day))
    }

    /// Reports the free spaces for each day in `range`, in chronological order.
    pub fn get_space_availabilities(&self, range: DateRange) -> Vec<SpaceAvailability> {
        range
            .days()
            .map(|date| SpaceAvailability {
                date,
                spaces_available: self.capacity.get_spaces_available(date),
            })
            .collect()
    }

    /// Quotes the price of each day in `range`, in chronological order.
    pub fn get_parking_prices_for_date_range(&self, range: DateRange) -> Vec<PriceQuote> {
        range
            .days()
            .map(|date| PriceQuote {
                date,
                price: self.pricing.get_price(date),
            })
            .collect()
    }

    /// Returns the summed price of every day in `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal_macros::dec;
    /// use carpark::{DateRange, ReservationEngine};
    ///
    /// let engine = ReservationEngine::in_memory();
    /// let week = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2023, 7, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 7, 7).unwrap(),
    /// ).unwrap();
    /// assert_eq!(engine.get_total_price(week), dec!(164.0));
    /// ```
    pub fn get_total_price(&self, range: DateRange) -> Decimal {
        range.days().map(|date| self.pricing.get_price(date)).sum()
    }

    /// Reserves one space on every day of `range` for `name`.
    ///
    /// The name is trimmed before use. Nothing is mutated unless every check
    /// passes.
    ///
    /// # Errors
    ///
    /// - [`Error::UnableToReserveSpace`] if the name is empty or any day in
    ///   the range is full.
    /// - [`Error::ReservationAlreadyExists`] if `name` already holds a
    ///   reservation.
    pub fn reserve_parking(&mut self, range: DateRange, name: &str) -> Result<Reservation> {
        let Some(name) = normalize_name(name) else {
            log::debug!("Rejecting reservation for {range}: no name given");
            return Err(unable_to_reserve(range));
        };

        if self.reservations.reservation_exists(&name) {
            log::debug!("Rejecting reservation for {name}: name already reserved");
            return Err(Error::ReservationAlreadyExists { name });
        }

        if !self.is_parking_available(range) {
            log::debug!("Rejecting reservation for {name}: no space during {range}");
            return Err(unable_to_reserve(range));
        }

        let reservation = Reservation::new(&name, range)?;
        for day in range {
            self.capacity.reserve_space(day);
        }
        self.reservations.add_reservation(reservation.clone());

        log::info!("Reserved {reservation}");
        Ok(reservation)
    }

    /// Moves the reservation held by `name` to `range`.
    ///
    /// The new range is checked as if the old one had already been released,
    /// so overlapping days the reservation itself occupies count as free. The
    /// check runs before anything is released; a rejected amendment keeps the
    /// old reservation and its capacity.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the name is empty.
    /// - [`Error::ReservationNotFound`] if `name` holds no reservation.
    /// - [`Error::UnableToReserveSpace`] if any day of the new range is full.
    pub fn amend_reservation(&mut self, range: DateRange, name: &str) -> Result<Reservation> {
        let name = require_name(name)?;
        let existing = self.reservations.get_reservation_by_name(&name)?;
        let old_range = existing.range();

        let fits = range.days().all(|day| {
            let released = i32::from(old_range.contains(day));
            self.capacity.get_spaces_available(day) + released > 0
        });
        if !fits {
            log::debug!("Rejecting amendment for {name}: no space during {range}");
            return Err(unable_to_reserve(range));
        }

        let amended = Reservation::new(&name, range)?;
        for day in old_range {
            self.capacity.deallocate_space(day);
        }
        self.reservations.remove_reservation(&name);
        for day in range {
            self.capacity.reserve_space(day);
        }
        self.reservations.add_reservation(amended.clone());

        log::info!("Amended reservation for {name}: {old_range} -> {range}");
        Ok(amended)
    }

    /// Cancels the reservation held by `name`, releasing its capacity.
    ///
    /// Returns the cancelled reservation.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the name is empty.
    /// - [`Error::ReservationNotFound`] if `name` holds no reservation.
    pub fn cancel_reservation(&mut self, name: &str) -> Result<Reservation> {
        let name = require_name(name)?;
        let existing = self.reservations.get_reservation_by_name(&name)?;

        for day in existing.range() {
            self.capacity.deallocate_space(day);
        }
        self.reservations.remove_reservation(&name);

        log::info!("Cancelled {existing}");
        Ok(existing)
    }

    /// Returns every reservation, sorted by name.
    pub fn get_reservations(&self) -> Vec<Reservation> {
        let mut all: Vec<_> = self.reservations.get_reservations().values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        all
    }

    /// Looks up the reservation held by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if `name` holds no reservation.
    pub fn get_reservation(&self, name: &str) -> Result<Reservation> {
        self.reservations.get_reservation_by_name(name.trim())
    }
}

fn unable_to_reserve(range: DateRange) -> Error {
    Error::UnableToReserveSpace {
        from: range.from(),
        to: range.to(),
    }
}

fn require_name(name: &str) -> Result<String> {
    normalize_name(name).ok_or_else(|| Error::InvalidArgument {
        argument: "name".to_string(),
        reason: "reservation name must not be empty".to_string(),
    })
}
