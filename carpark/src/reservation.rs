//! Named parking reservations.
//!
//! A reservation is a customer name plus the inclusive range of days it holds a
//! space for. The name is the unique key in the reservation store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::DateRange;

/// A named claim over a range of days.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use carpark::{DateRange, Reservation};
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 6).unwrap(),
/// ).unwrap();
///
/// let reservation = Reservation::new("  Ian Richards ", range).unwrap();
/// assert_eq!(reservation.name(), "Ian Richards");
/// assert_eq!(reservation.days(), 6);
///
/// assert!(Reservation::new("   ", range).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    name: String,
    #[serde(flatten)]
    range: DateRange,
}

impl Reservation {
    /// Creates a reservation for `name` over `range`.
    ///
    /// The name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(name: impl AsRef<str>, range: DateRange) -> Result<Self, ValidationError> {
        let name = normalize_name(name.as_ref()).ok_or_else(|| ValidationError {
            field: "name".into(),
            message: "name must be non-empty after trimming whitespace".into(),
        })?;

        Ok(Self { name, range })
    }

    /// Returns the customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the first reserved day.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.range.from()
    }

    /// Returns the last reserved day.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.range.to()
    }

    /// Returns the reserved days as a range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the number of days held.
    #[must_use]
    pub fn days(&self) -> usize {
        self.range().len()
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.range)
    }
}

/// Trims a reservation name, returning `None` when nothing is left.
#[must_use]
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
