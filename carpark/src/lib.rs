#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # carpark
//!
//! A library for single-site parking availability, pricing and reservations.
//!
//! The site has a fixed number of spaces per day. Callers ask which days have
//! room, what a range of days costs, and reserve, amend or cancel a named
//! reservation over a range. A reservation only succeeds when every day in
//! its range has a free space.
//!
//! ## Core Types
//!
//! - [`DateRange`]: validated inclusive range of calendar days
//! - [`capacity::CapacityStore`], [`store::ReservationStore`] and
//!   [`pricing::PricingEngine`]: the three collaborators the engine drives
//! - [`ReservationEngine`]: availability, pricing and reservation lifecycle
//! - [`RequestFacade`] and [`SharedFacade`]: request/response boundary
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use carpark::RequestFacade;
//!
//! let mut facade = RequestFacade::in_memory();
//! let from = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2023, 7, 7).unwrap();
//!
//! assert_eq!(facade.quote_price(from, to).total, dec!(164.0));
//! assert_eq!(facade.reserve(from, to, "Bill Gates").status, "Reserved");
//! assert_eq!(facade.check_availability(from, to).spaces[0].spaces_available, 9);
//! ```

pub mod bootstrap;
pub mod capacity;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod facade;
pub mod logging;
pub mod pricing;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use capacity::{CapacityStore, InMemoryCapacityStore, SpaceAvailability, TOTAL_SPACES};
pub use config::{Config, ConfigBuilder};
pub use date::DateRange;
pub use engine::ReservationEngine;
pub use error::{Error, Result};
pub use facade::{RequestFacade, SharedFacade};
pub use logging::{init_logger, LogLevel, Logger};
pub use pricing::{PriceQuote, PricingEngine, SeasonalPricing};
pub use reservation::Reservation;
pub use store::{InMemoryReservationStore, ReservationStore};
