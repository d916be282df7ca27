//! Error types for the carpark library.
//!
//! Every engine operation returns a tagged [`Result`] instead of unwinding, so
//! callers (the request facade in particular) can branch on the error kind.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for operations that may fail with a carpark error.
///
/// # Examples
///
/// ```
/// use carpark::{Error, Result};
///
/// fn example_operation() -> Result<i32> {
///     Ok(10)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the carpark library.
#[derive(Debug, Error)]
pub enum Error {
    /// At least one day in the requested range has no free space, or the
    /// reservation name was missing.
    #[error("unable to reserve space for the date range {from} - {to}")]
    UnableToReserveSpace {
        /// First day of the rejected range.
        from: NaiveDate,
        /// Last day of the rejected range.
        to: NaiveDate,
    },

    /// No reservation is stored under the given name.
    #[error("reservation not found for {name}")]
    ReservationNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A reservation already exists under the given name.
    #[error("a reservation already exists for {name}")]
    ReservationAlreadyExists {
        /// The name that is already taken.
        name: String,
    },

    /// A required argument was absent or empty.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The offending argument.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The end of a date range lies before its start.
    #[error("invalid date range {from} - {to}: end date must not precede start date")]
    InvalidDateRange {
        /// The requested start date.
        from: NaiveDate,
        /// The requested end date.
        to: NaiveDate,
    },

    /// A configuration or input value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::date::InvalidDateRangeError> for Error {
    fn from(err: crate::date::InvalidDateRangeError) -> Self {
        Self::InvalidDateRange {
            from: err.from,
            to: err.to,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error reports a missing reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::Error;
    ///
    /// let err = Error::ReservationNotFound { name: "Bob Johnson".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReservationNotFound { .. })
    }

    /// Check if the error reports insufficient capacity.
    #[must_use]
    pub fn is_capacity_exhausted(&self) -> bool {
        matches!(self, Self::UnableToReserveSpace { .. })
    }
}
