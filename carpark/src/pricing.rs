//! Daily parking prices.
//!
//! Prices follow one fixed rule: a seasonal surcharge picked from the calendar
//! month, plus a weekday or weekend base rate.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Base price for Monday through Friday.
pub const WEEKDAY_PRICE: Decimal = dec!(10.0);

/// Base price for Saturday and Sunday.
pub const WEEKEND_PRICE: Decimal = dec!(15.0);

/// Surcharge applied in June, July and August.
pub const SUMMER_SURCHARGE: Decimal = dec!(12.0);

/// Surcharge applied in December, January and February.
pub const WINTER_SURCHARGE: Decimal = dec!(8.0);

/// The price of one space on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// The quoted day.
    pub date: NaiveDate,
    /// Price for that day.
    pub price: Decimal,
}

/// Trait for computing the price of parking on a single day.
#[cfg_attr(test, mockall::automock)]
pub trait PricingEngine {
    /// Returns the price of one space on `date`.
    fn get_price(&self, date: NaiveDate) -> Decimal;
}

/// Pricing season derived from the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    /// June through August.
    Summer,
    /// December through February.
    Winter,
    /// Every other month.
    Shoulder,
}

impl Season {
    /// Classifies a date by its (1-based) calendar month.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use carpark::pricing::Season;
    ///
    /// let day = |m| NaiveDate::from_ymd_opt(2023, m, 15).unwrap();
    /// assert_eq!(Season::of(day(7)), Season::Summer);
    /// assert_eq!(Season::of(day(12)), Season::Winter);
    /// assert_eq!(Season::of(day(2)), Season::Winter);
    /// assert_eq!(Season::of(day(3)), Season::Shoulder);
    /// ```
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        match date.month() {
            6..=8 => Self::Summer,
            12 | 1 | 2 => Self::Winter,
            _ => Self::Shoulder,
        }
    }

    /// Returns the surcharge added to the base price during this season.
    #[must_use]
    pub const fn surcharge(self) -> Decimal {
        match self {
            Self::Summer => SUMMER_SURCHARGE,
            Self::Winter => WINTER_SURCHARGE,
            Self::Shoulder => Decimal::ZERO,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summer => write!(f, "summer"),
            Self::Winter => write!(f, "winter"),
            Self::Shoulder => write!(f, "shoulder"),
        }
    }
}

/// Returns `true` for Saturday and Sunday.
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The fixed seasonal/weekday pricing rule.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use carpark::pricing::{PricingEngine, SeasonalPricing};
///
/// let pricing = SeasonalPricing;
/// // Saturday in July: 15 weekend + 12 summer.
/// let saturday = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
/// assert_eq!(pricing.get_price(saturday), dec!(27.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalPricing;

impl PricingEngine for SeasonalPricing {
    fn get_price(&self, date: NaiveDate) -> Decimal {
        let surcharge = Season::of(date).surcharge();
        let base = if is_weekend(date) {
            WEEKEND_PRICE
        } else {
            WEEKDAY_PRICE
        };
        surcharge + base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summer_weekend_price() {
        // 2023-07-01 is a Saturday.
        assert_eq!(SeasonalPricing.get_price(date(2023, 7, 1)), dec!(27.0));
    }

    #[test]
    fn test_summer_weekday_price() {
        assert_eq!(SeasonalPricing.get_price(date(2023, 7, 3)), dec!(22.0));
    }

    #[test]
    fn test_winter_weekend_price() {
        // 2023-01-01 is a Sunday.
        assert_eq!(SeasonalPricing.get_price(date(2023, 1, 1)), dec!(23.0));
    }

    #[test]
    fn test_winter_weekday_price() {
        // 2023-02-01 is a Wednesday.
        assert_eq!(SeasonalPricing.get_price(date(2023, 2, 1)), dec!(18.0));
    }

    #[test]
    fn test_december_counts_as_winter() {
        // 2023-12-05 is a Tuesday.
        assert_eq!(SeasonalPricing.get_price(date(2023, 12, 5)), dec!(18.0));
    }

    #[test]
    fn test_shoulder_weekend_price() {
        // 2023-10-01 is a Sunday, 2023-04-01 a Saturday.
        assert_eq!(SeasonalPricing.get_price(date(2023, 10, 1)), dec!(15.0));
        assert_eq!(SeasonalPricing.get_price(date(2023, 4, 1)), dec!(15.0));
    }

    #[test]
    fn test_shoulder_weekday_price() {
        assert_eq!(SeasonalPricing.get_price(date(2023, 10, 2)), dec!(10.0));
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(Season::of(date(2023, 5, 31)), Season::Shoulder);
        assert_eq!(Season::of(date(2023, 6, 1)), Season::Summer);
        assert_eq!(Season::of(date(2023, 8, 31)), Season::Summer);
        assert_eq!(Season::of(date(2023, 9, 1)), Season::Shoulder);
        assert_eq!(Season::of(date(2023, 11, 30)), Season::Shoulder);
        assert_eq!(Season::of(date(2023, 12, 1)), Season::Winter);
        assert_eq!(Season::of(date(2024, 2, 29)), Season::Winter);
        assert_eq!(Season::of(date(2024, 3, 1)), Season::Shoulder);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(date(2023, 2, 4)));
        assert!(is_weekend(date(2023, 2, 5)));
        assert!(!is_weekend(date(2023, 2, 6)));
        assert!(!is_weekend(date(2023, 2, 3)));
    }

    #[test]
    fn test_season_display() {
        assert_eq!(Season::Summer.to_string(), "summer");
        assert_eq!(Season::Winter.to_string(), "winter");
        assert_eq!(Season::Shoulder.to_string(), "shoulder");
    }
}
