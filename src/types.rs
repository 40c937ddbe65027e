use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MAX_YEAR,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999).
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
///
/// This is a structural bound shared by both calendars; whether a year is
/// actually convertible is decided by the BS calendar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
///
/// Both calendars count twelve months; the BS month lengths vary per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given month length.
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
///
/// The month length comes from the Gregorian rule for AD dates and from the
/// calendar table for BS dates, so construction goes through
/// [`Day::bounded`] or [`Day::gregorian`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating against an explicit month length.
    /// `year` and `month` only label the error.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or exceeds `month_len`.
    pub fn bounded(value: u8, month_len: u16, year: u16, month: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            month,
            day: value,
            year,
        })?;

        if u16::from(value) > month_len {
            return Err(ParseError::InvalidDay {
                month,
                day: value,
                year,
            });
        }

        Ok(Self(non_zero))
    }

    /// Creates a new Day, validating against the Gregorian length of
    /// `month` in `year` (leap years included).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn gregorian(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        Self::bounded(
            value,
            u16::from(gregorian_days_in_month(year, month)),
            year,
            month,
        )
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without a month length, so only the structural
        // bound (1..=32, the widest BS month) applies here.
        if value > MAX_DAY {
            return Err(ParseError::InvalidDay {
                month: 0,
                day: value,
                year: 0,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            month: 0,
            day: value,
            year: 0,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2062).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 2062.try_into().unwrap();
        assert_eq!(year.get(), 2062);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = 10000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(2062).unwrap();
        assert_eq!(year.to_string(), "2062");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2062).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "2062");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
    }

    #[test]
    fn test_day_bounded() {
        // BS months can run to 32 days
        assert!(Day::bounded(32, 32, 2062, 2).is_ok());
        assert!(Day::bounded(33, 32, 2062, 2).is_err());
        assert!(matches!(
            Day::bounded(30, 29, 2062, 9),
            Err(ParseError::InvalidDay {
                month: 9,
                day: 30,
                year: 2062
            })
        ));
        assert!(Day::bounded(0, 30, 2062, 1).is_err());
    }

    #[test]
    fn test_day_gregorian() {
        // January - 31 days
        assert!(Day::gregorian(1, 2024, 1).is_ok());
        assert!(Day::gregorian(31, 2024, 1).is_ok());

        // February non-leap - 28 days
        assert!(Day::gregorian(28, 2023, 2).is_ok());
        assert!(Day::gregorian(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::gregorian(29, 2024, 2).is_ok());
        assert!(Day::gregorian(30, 2024, 2).is_err());

        // April - 30 days
        assert!(Day::gregorian(30, 2024, 4).is_ok());
        assert!(Day::gregorian(31, 2024, 4).is_err());
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 32.try_into().unwrap();
        assert_eq!(day.get(), 32);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 33.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_gregorian_days_in_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(
                gregorian_days_in_month(2024, month),
                31,
                "Month {month} should have 31 days"
            );
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(
                gregorian_days_in_month(2024, month),
                30,
                "Month {month} should have 30 days"
            );
        }
        assert_eq!(gregorian_days_in_month(2023, 2), 28);
        assert_eq!(gregorian_days_in_month(2024, 2), 29);
        assert_eq!(gregorian_days_in_month(1900, 2), 28);
        assert_eq!(gregorian_days_in_month(2000, 2), 29);
    }
}
