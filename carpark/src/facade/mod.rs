//! Request facade.
//!
//! The facade is the boundary external callers talk to. It accepts raw
//! `(from, to, name)` values, runs them through the [`ReservationEngine`], and
//! packages every outcome into a serializable response. Engine errors never
//! cross this boundary; they become status strings.
//!
//! A range whose end precedes its start is not an error for queries: no day
//! qualifies, so the lists come back empty, availability is `false` and the
//! total is zero. Reserve and amend report such a range through their status.

mod model;
mod shared;

pub use model::{
    AvailabilityResponse, CancellationResponse, ParkingAvailabilityResponse, PriceResponse,
    ReservationResponse, STATUS_AMENDED, STATUS_CANCELLED, STATUS_NOT_FOUND, STATUS_RESERVED,
};
pub use shared::SharedFacade;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::capacity::{CapacityStore, InMemoryCapacityStore};
use crate::engine::ReservationEngine;
use crate::error::Error;
use crate::pricing::{PricingEngine, SeasonalPricing};
use crate::store::{InMemoryReservationStore, ReservationStore};
use crate::{DateRange, Reservation};

/// Translates external requests into engine calls.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use carpark::RequestFacade;
///
/// let mut facade = RequestFacade::in_memory();
/// let from = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2023, 2, 3).unwrap();
///
/// let response = facade.reserve(from, to, "Bill Gates");
/// assert_eq!(response.status, "Reserved");
///
/// let response = facade.cancel("Bill Gates");
/// assert_eq!(response.status, "Cancelled");
/// ```
#[derive(Debug, Clone)]
pub struct RequestFacade<
    C = InMemoryCapacityStore,
    R = InMemoryReservationStore,
    P = SeasonalPricing,
> {
    engine: ReservationEngine<C, R, P>,
}

impl RequestFacade {
    /// Creates a facade over an empty in-memory engine.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(ReservationEngine::in_memory())
    }
}

impl Default for RequestFacade {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<C, R, P> RequestFacade<C, R, P>
where
    C: CapacityStore,
    R: ReservationStore,
    P: PricingEngine,
{
    /// Wraps an engine.
    #[must_use]
    pub const fn new(engine: ReservationEngine<C, R, P>) -> Self {
        Self { engine }
    }

    /// Returns the wrapped engine.
    #[must_use]
    pub const fn engine(&self) -> &ReservationEngine<C, R, P> {
        &self.engine
    }

    /// Consumes the facade, returning the wrapped engine.
    #[must_use]
    pub fn into_engine(self) -> ReservationEngine<C, R, P> {
        self.engine
    }

    /// Reports free spaces for each day from `from` to `to`.
    pub fn check_availability(&self, from: NaiveDate, to: NaiveDate) -> AvailabilityResponse {
        let spaces = DateRange::new(from, to)
            .map(|range| self.engine.get_space_availabilities(range))
            .unwrap_or_default();
        AvailabilityResponse { from, to, spaces }
    }

    /// Reports whether every day from `from` to `to` has a free space.
    pub fn is_parking_available(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ParkingAvailabilityResponse {
        let is_space_available = DateRange::new(from, to)
            .is_ok_and(|range| self.engine.is_parking_available(range));
        ParkingAvailabilityResponse {
            from,
            to,
            is_space_available,
        }
    }

    /// Quotes each day from `from` to `to`, plus the total.
    pub fn quote_price(&self, from: NaiveDate, to: NaiveDate) -> PriceResponse {
        let prices = DateRange::new(from, to)
            .map(|range| self.engine.get_parking_prices_for_date_range(range))
            .unwrap_or_default();
        let total: Decimal = prices.iter().map(|quote| quote.price).sum();
        PriceResponse {
            from,
            to,
            prices,
            total,
        }
    }

    /// Reserves `from` to `to` for `name`.
    ///
    /// The status is [`STATUS_RESERVED`] on success and a description of the
    /// failure otherwise.
    pub fn reserve(&mut self, from: NaiveDate, to: NaiveDate, name: &str) -> ReservationResponse {
        let outcome = DateRange::new(from, to)
            .map_err(Error::from)
            .and_then(|range| self.engine.reserve_parking(range, name));

        let (status, accepted) = match outcome {
            Ok(_) => (STATUS_RESERVED.to_string(), true),
            Err(Error::UnableToReserveSpace { from, to }) => (
                format!(
                    "Unable to reserved reservation due to insufficient spaces available for the given date range {from} - {to}"
                ),
                false,
            ),
            Err(err) => (describe(&err), false),
        };

        ReservationResponse {
            from,
            to,
            name: name.to_string(),
            status,
            accepted,
        }
    }

    /// Moves the reservation held by `name` to `from`..`to`.
    ///
    /// The status is [`STATUS_AMENDED`] on success and a description of the
    /// failure otherwise. A rejected amendment keeps the old reservation.
    pub fn amend(&mut self, from: NaiveDate, to: NaiveDate, name: &str) -> ReservationResponse {
        let outcome = DateRange::new(from, to)
            .map_err(Error::from)
            .and_then(|range| self.engine.amend_reservation(range, name));

        let (status, accepted) = match outcome {
            Ok(_) => (STATUS_AMENDED.to_string(), true),
            Err(Error::UnableToReserveSpace { from, to }) => (
                format!(
                    "Unable to amend reservation due to insufficient spaces available for the given date range {from} - {to}"
                ),
                false,
            ),
            Err(Error::ReservationNotFound { .. }) => (STATUS_NOT_FOUND.to_string(), false),
            Err(err) => (describe(&err), false),
        };

        ReservationResponse {
            from,
            to,
            name: name.to_string(),
            status,
            accepted,
        }
    }

    /// Cancels the reservation held by `name`.
    ///
    /// Any failure reports [`STATUS_NOT_FOUND`].
    pub fn cancel(&mut self, name: &str) -> CancellationResponse {
        let (status, accepted) = match self.engine.cancel_reservation(name) {
            Ok(_) => (STATUS_CANCELLED, true),
            Err(err) => {
                log::debug!("Cancellation for '{name}' failed: {err}");
                (STATUS_NOT_FOUND, false)
            }
        };

        CancellationResponse {
            name: name.to_string(),
            status: status.to_string(),
            accepted,
        }
    }

    /// Returns every reservation, sorted by name.
    pub fn list_reservations(&self) -> Vec<Reservation> {
        self.engine.get_reservations()
    }
}

fn describe(err: &Error) -> String {
    let message = err.to_string();
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
