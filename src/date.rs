use crate::consts::DATE_SEPARATOR;
use crate::error::DateError;
use crate::prelude::*;
use crate::table;
use crate::types::{Day, Month, Year};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two calendar systems a date string can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Calendar {
    /// Bikram Sambat.
    #[serde(rename = "bs")]
    Bs,
    /// Gregorian (Anno Domini).
    #[serde(rename = "ad")]
    Ad,
}

/// Structural parse failure for a date string or its components.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0} (must be 1-9999)")]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {_0} (must be 1-12)")]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A validated date in the Bikram Sambat calendar.
///
/// Construction checks the day against the calendar table, so a `BsDate`
/// always names a real day in a supported year. Display is `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BsDate {
    year: Year,
    month: Month,
    day: Day,
}

/// A validated date in the Gregorian calendar.
///
/// The day is checked against the standard month lengths including the
/// leap-year rule. Display is `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct AdDate {
    year: Year,
    month: Month,
    day: Day,
}

impl BsDate {
    /// Creates a BS date, validating the day against the calendar table.
    ///
    /// # Errors
    /// [`DateError::YearOutOfRange`] when the year is not in the table,
    /// [`DateError::Parse`] for structural failures.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let y = Year::new(year)?;
        let m = Month::new(month)?;
        let len = table::month_days(year, month)?;
        let d = Day::bounded(day, len, year, month)?;
        Ok(Self {
            year: y,
            month: m,
            day: d,
        })
    }

    /// Parses loosely formatted digit input (see [`normalize`]) into a
    /// validated BS date.
    ///
    /// # Errors
    /// As [`BsDate::new`], plus [`ParseError::InvalidFormat`] for inputs
    /// that do not normalize.
    pub fn parse_loose(input: &str) -> Result<Self, DateError> {
        let (y, m, d) = normalize(input)?;
        Self::new(y, m, d)
    }

    /// Returns the year (1970..=2100 for supported dates)
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=32)
    pub fn day(&self) -> u8 {
        self.day.get()
    }
}

impl AdDate {
    /// Creates an AD date, validating the day against the Gregorian rule.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let y = Year::new(year)?;
        let m = Month::new(month)?;
        let d = Day::gregorian(day, year, month)?;
        Ok(Self {
            year: y,
            month: m,
            day: d,
        })
    }

    /// Parses loosely formatted digit input (see [`normalize`]) into a
    /// validated AD date.
    ///
    /// # Errors
    /// As [`AdDate::new`], plus `InvalidFormat` for inputs that do not
    /// normalize.
    pub fn parse_loose(input: &str) -> Result<Self, ParseError> {
        let (y, m, d) = normalize(input)?;
        Self::new(y, m, d)
    }

    /// Returns the year
    pub fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    pub fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day within the month (1..=31)
    pub fn day(&self) -> u8 {
        self.day.get()
    }
}

/// Splits a strict `YYYY-MM-DD` string into numeric components.
fn split_strict(s: &str) -> Result<(u16, u8, u8), ParseError> {
    let bytes = s.as_bytes();
    let sep = DATE_SEPARATOR as u8;
    let well_placed = bytes.len() == 10 && bytes[4] == sep && bytes[7] == sep;
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_placed || !digits_ok {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    let year = s[0..4]
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    let month = s[5..7]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    let day = s[8..10]
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    Ok((year, month, day))
}

/// Normalizes loosely formatted digit input into (year, month, day).
///
/// Everything that is not an ASCII digit is dropped. Eight digits split as
/// `YYYYMMDD`. Seven digits leave the month or the day a single digit; the
/// fixed tie-break: when the digit right after the year is greater than 1
/// the month is that single digit (the day takes two), otherwise the month
/// takes two digits and the day one. Any other digit count fails.
///
/// # Errors
/// `ParseError::EmptyInput` for blank input, `ParseError::InvalidFormat`
/// for any other digit count.
pub fn normalize(input: &str) -> Result<(u16, u8, u8), ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    let (year, month, day) = match digits.len() {
        8 => (&digits[0..4], &digits[4..6], &digits[6..8]),
        7 => {
            let rest = &digits[4..];
            if rest.as_bytes()[0] > b'1' {
                // Month is 1 digit, day is 2
                (&digits[0..4], &rest[0..1], &rest[1..3])
            } else {
                // Month is 2 digits, day is 1
                (&digits[0..4], &rest[0..2], &rest[2..3])
            }
        }
        _ => return Err(ParseError::InvalidFormat(input.to_owned())),
    };

    let y = year
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(input.to_owned()))?;
    let m = month
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(input.to_owned()))?;
    let d = day
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(input.to_owned()))?;
    Ok((y, m, d))
}

impl FromStr for BsDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput.into());
        }
        let (y, m, d) = split_strict(trimmed)?;
        Self::new(y, m, d)
    }
}

impl FromStr for AdDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (y, m, d) = split_strict(trimmed)?;
        Self::new(y, m, d)
    }
}

impl serde::Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for AdDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for AdDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
