//! Calendar date ranges.
//!
//! Every availability, pricing and reservation operation works on whole
//! calendar days. [`DateRange`] is the inclusive span those operations iterate.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// An inclusive range of calendar days.
///
/// The constructor guarantees `from <= to`, so a range always covers at least
/// one day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use carpark::DateRange;
///
/// let from = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2023, 7, 7).unwrap();
/// let range = DateRange::new(from, to).unwrap();
///
/// assert_eq!(range.len(), 7);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2023, 7, 4).unwrap()));
/// assert!(DateRange::new(to, from).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns an error if `to` is earlier than `from`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, InvalidDateRangeError> {
        if to < from {
            Err(InvalidDateRangeError { from, to })
        } else {
            Ok(Self { from, to })
        }
    }

    /// Creates a range covering exactly one day.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn from(&self) -> NaiveDate {
        self.from
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn to(&self) -> NaiveDate {
        self.to
    }

    /// Returns `true` if the given day falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Returns the number of days in the range (inclusive).
    #[must_use]
    pub fn len(&self) -> usize {
        // from <= to is guaranteed, so the difference is never negative.
        usize::try_from((self.to - self.from).num_days()).map_or(0, |days| days + 1)
    }

    /// Always `false`: a valid range covers at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over every day in the range, in chronological order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use carpark::DateRange;
    ///
    /// let from = NaiveDate::from_ymd_opt(2023, 12, 30).unwrap();
    /// let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let days: Vec<NaiveDate> = DateRange::new(from, to).unwrap().days().collect();
    ///
    /// assert_eq!(days.len(), 3);
    /// assert_eq!(days[2], to);
    /// ```
    #[must_use]
    pub const fn days(self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.from),
            last: self.to,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.from, self.to)
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DateRangeIter {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.last {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(current) if current <= self.last => {
                usize::try_from((self.last - current).num_days()).map_or(0, |days| days + 1)
            }
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRangeIter {}

/// Error type for ranges whose end precedes their start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateRangeError {
    /// The requested start date.
    pub from: NaiveDate,
    /// The requested end date.
    pub to: NaiveDate,
}

impl fmt::Display for InvalidDateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid date range {} - {}: end date must not precede start date",
            self.from, self.to
        )
    }
}

impl std::error::Error for InvalidDateRangeError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_validation() {
        assert!(DateRange::new(date(2023, 1, 1), date(2023, 1, 1)).is_ok());
        assert!(DateRange::new(date(2023, 1, 1), date(2023, 1, 10)).is_ok());

        let err = DateRange::new(date(2023, 1, 10), date(2023, 1, 1)).unwrap_err();
        assert_eq!(err.from, date(2023, 1, 10));
        assert_eq!(err.to, date(2023, 1, 1));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::single(date(2023, 10, 1));
        assert_eq!(range.len(), 1);
        assert_eq!(range.from(), range.to());
        assert!(!range.is_empty());
    }

    #[test]
    fn test_range_len() {
        let range = DateRange::new(date(2023, 2, 1), date(2023, 2, 10)).unwrap();
        assert_eq!(range.len(), 10);
        assert_eq!(range.days().len(), 10);
    }

    #[test]
    fn test_days_cross_month_and_leap_day() {
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]);
    }

    #[test]
    fn test_days_are_chronological() {
        let range = DateRange::new(date(2023, 7, 1), date(2023, 7, 7)).unwrap();
        let days: Vec<_> = range.into_iter().collect();
        assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(days.first(), Some(&date(2023, 7, 1)));
        assert_eq!(days.last(), Some(&date(2023, 7, 7)));
    }

    #[test]
    fn test_contains() {
        let range = DateRange::new(date(2023, 1, 1), date(2023, 1, 6)).unwrap();
        assert!(range.contains(date(2023, 1, 1)));
        assert!(range.contains(date(2023, 1, 6)));
        assert!(!range.contains(date(2022, 12, 31)));
        assert!(!range.contains(date(2023, 1, 7)));
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(date(2023, 1, 6), date(2023, 1, 9)).unwrap();
        assert_eq!(format!("{range}"), "2023-01-06 - 2023-01-09");
    }

    #[test]
    fn test_iterator_ends_at_max_date() {
        let range = DateRange::single(NaiveDate::MAX);
        assert_eq!(range.days().count(), 1);
    }
}
