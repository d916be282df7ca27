//! Response shapes returned by the request facade.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::capacity::SpaceAvailability;
use crate::pricing::PriceQuote;

/// Status reported for a successful reservation.
pub const STATUS_RESERVED: &str = "Reserved";

/// Status reported for a successful amendment.
pub const STATUS_AMENDED: &str = "Reservation Amended";

/// Status reported for a successful cancellation.
pub const STATUS_CANCELLED: &str = "Cancelled";

/// Status reported for any failed cancellation.
pub const STATUS_NOT_FOUND: &str = "Unable to find reservation!";

/// Per-day free spaces for a requested range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityResponse {
    /// Requested start date.
    pub from: NaiveDate,
    /// Requested end date.
    pub to: NaiveDate,
    /// One entry per day, chronological.
    pub spaces: Vec<SpaceAvailability>,
}

/// Whether a whole range can be reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkingAvailabilityResponse {
    /// Requested start date.
    pub from: NaiveDate,
    /// Requested end date.
    pub to: NaiveDate,
    /// `true` only if every day has a free space.
    pub is_space_available: bool,
}

/// Per-day prices for a requested range, with their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceResponse {
    /// Requested start date.
    pub from: NaiveDate,
    /// Requested end date.
    pub to: NaiveDate,
    /// One quote per day, chronological.
    pub prices: Vec<PriceQuote>,
    /// Sum of every quote.
    pub total: Decimal,
}

/// Outcome of a reserve or amend request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationResponse {
    /// Requested start date.
    pub from: NaiveDate,
    /// Requested end date.
    pub to: NaiveDate,
    /// Requested customer name, as given.
    pub name: String,
    /// Human-readable outcome.
    pub status: String,
    /// `true` if the request changed state.
    pub accepted: bool,
}

/// Outcome of a cancel request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancellationResponse {
    /// Requested customer name, as given.
    pub name: String,
    /// Human-readable outcome.
    pub status: String,
    /// `true` if a reservation was cancelled.
    pub accepted: bool,
}
