//! Thread-safe handle to a request facade.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use super::{
    AvailabilityResponse, CancellationResponse, ParkingAvailabilityResponse, PriceResponse,
    RequestFacade, ReservationResponse,
};
use crate::Reservation;

/// A cloneable facade handle that serializes every request behind one lock.
///
/// Both stores live behind the same mutex, so a reservation's capacity claim
/// and its record insertion are never observed half-done. A poisoned lock is
/// recovered: every facade operation validates before it mutates, so the
/// guarded state is consistent even after a panicking caller.
///
/// # Examples
///
/// ```
/// use std::thread;
/// use chrono::NaiveDate;
/// use carpark::SharedFacade;
///
/// let facade = SharedFacade::default();
/// let day = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let facade = facade.clone();
///         thread::spawn(move || facade.reserve(day, day, &format!("driver-{i}")))
///     })
///     .collect();
/// for handle in handles {
///     assert!(handle.join().unwrap().accepted);
/// }
///
/// assert_eq!(facade.check_availability(day, day).spaces[0].spaces_available, 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedFacade {
    inner: Arc<Mutex<RequestFacade>>,
}

impl SharedFacade {
    /// Wraps a facade for shared use.
    #[must_use]
    pub fn new(facade: RequestFacade) -> Self {
        Self {
            inner: Arc::new(Mutex::new(facade)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RequestFacade> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`RequestFacade::check_availability`].
    #[must_use]
    pub fn check_availability(&self, from: NaiveDate, to: NaiveDate) -> AvailabilityResponse {
        self.lock().check_availability(from, to)
    }

    /// See [`RequestFacade::is_parking_available`].
    #[must_use]
    pub fn is_parking_available(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ParkingAvailabilityResponse {
        self.lock().is_parking_available(from, to)
    }

    /// See [`RequestFacade::quote_price`].
    #[must_use]
    pub fn quote_price(&self, from: NaiveDate, to: NaiveDate) -> PriceResponse {
        self.lock().quote_price(from, to)
    }

    /// See [`RequestFacade::reserve`].
    pub fn reserve(&self, from: NaiveDate, to: NaiveDate, name: &str) -> ReservationResponse {
        self.lock().reserve(from, to, name)
    }

    /// See [`RequestFacade::amend`].
    pub fn amend(&self, from: NaiveDate, to: NaiveDate, name: &str) -> ReservationResponse {
        self.lock().amend(from, to, name)
    }

    /// See [`RequestFacade::cancel`].
    pub fn cancel(&self, name: &str) -> CancellationResponse {
        self.lock().cancel(name)
    }

    /// See [`RequestFacade::list_reservations`].
    #[must_use]
    pub fn list_reservations(&self) -> Vec<Reservation> {
        self.lock().list_reservations()
    }
}

impl From<RequestFacade> for SharedFacade {
    fn from(facade: RequestFacade) -> Self {
        Self::new(facade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_concurrent_reservations_never_overbook() {
        let facade = SharedFacade::default();
        let (from, to) = (date(2023, 6, 1), date(2023, 6, 3));

        let handles: Vec<_> = (0..25)
            .map(|i| {
                let facade = facade.clone();
                thread::spawn(move || facade.reserve(from, to, &format!("driver-{i}")).accepted)
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count();

        assert_eq!(accepted, 10);
        assert_eq!(facade.list_reservations().len(), 10);
        assert!(!facade.is_parking_available(from, to).is_space_available);
    }

    #[test]
    fn test_clones_share_state() {
        let facade = SharedFacade::default();
        let other = facade.clone();
        let day = date(2023, 1, 1);

        facade.reserve(day, day, "Ian Richards");
        assert_eq!(other.cancel("Ian Richards").status, "Cancelled");
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let facade = SharedFacade::default();
        let poisoner = facade.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.lock();
            panic!("poison the lock");
        })
        .join();

        let day = date(2023, 1, 1);
        assert!(facade.reserve(day, day, "Bill Gates").accepted);
    }
}
