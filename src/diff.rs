//! Date differences: an exact civil-calendar breakdown and a deliberately
//! approximate human-readable rendering.
//!
//! The two algorithms disagree by design. [`Converter::diff`] is exact:
//! years and months come from proleptic civil-calendar subtraction and the
//! day/time figures from the true day span. [`Converter::human_diff`] uses
//! a fixed 365-day year and 30-day month, which keeps the summary stable
//! and readable; do not unify them.

use crate::converter::Converter;
use crate::date::{AdDate, BsDate, Calendar};
use crate::days::civil_days;
use crate::error::DateError;
use crate::format::{transliterate_digits, Locale};
use serde::{Deserialize, Serialize};

const HOURS_PER_DAY: i64 = 24;
const MINUTES_PER_DAY: i64 = 1_440;
const SECONDS_PER_DAY: i64 = 86_400;

/// Approximate year length used by [`Converter::human_diff`].
const HUMAN_DAYS_PER_YEAR: i64 = 365;
/// Approximate month length used by [`Converter::human_diff`].
const HUMAN_DAYS_PER_MONTH: i64 = 30;

/// The difference between two dates.
///
/// `years` and `months` are the exact calendar breakdown (months in
/// 0..=11). `days` is the exact absolute civil day span, and `hours`,
/// `minutes`, `seconds` scale it assuming midnight timestamps. Every
/// component is non-negative; argument order does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateDiff {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Selects one component of a [`DateDiff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Converter {
    /// Resolves a date string in either calendar to its AD equivalent.
    fn resolve_ad(&self, input: &str, calendar: Calendar) -> Result<AdDate, DateError> {
        match calendar {
            Calendar::Ad => Ok(AdDate::parse_loose(input)?),
            Calendar::Bs => {
                let bs = BsDate::parse_loose(input)?;
                self.bs_to_ad(&bs)
            }
        }
    }

    /// Exact difference between two date strings of the given calendar.
    ///
    /// Both inputs are normalized to AD first; BS inputs convert through
    /// the table.
    ///
    /// # Errors
    /// Parse and conversion failures of either input.
    pub fn diff(
        &self,
        date1: &str,
        date2: &str,
        calendar: Calendar,
    ) -> Result<DateDiff, DateError> {
        let a = self.resolve_ad(date1, calendar)?;
        let b = self.resolve_ad(date2, calendar)?;
        let (first, second) = if a <= b { (a, b) } else { (b, a) };

        let mut months_total = (i64::from(second.year()) - i64::from(first.year())) * 12
            + i64::from(second.month())
            - i64::from(first.month());
        if second.day() < first.day() {
            months_total -= 1;
        }

        let days = civil_days(second.year(), second.month(), second.day())
            - civil_days(first.year(), first.month(), first.day());

        Ok(DateDiff {
            years: months_total / 12,
            months: months_total % 12,
            days,
            hours: days * HOURS_PER_DAY,
            minutes: days * MINUTES_PER_DAY,
            seconds: days * SECONDS_PER_DAY,
        })
    }

    /// One component of [`Converter::diff`].
    ///
    /// # Errors
    /// As [`Converter::diff`].
    pub fn diff_in(
        &self,
        date1: &str,
        date2: &str,
        calendar: Calendar,
        unit: DiffUnit,
    ) -> Result<i64, DateError> {
        let diff = self.diff(date1, date2, calendar)?;
        Ok(match unit {
            DiffUnit::Years => diff.years,
            DiffUnit::Months => diff.months,
            DiffUnit::Days => diff.days,
            DiffUnit::Hours => diff.hours,
            DiffUnit::Minutes => diff.minutes,
            DiffUnit::Seconds => diff.seconds,
        })
    }

    /// Human-readable difference, e.g. `2 years, 3 months, 10 days`.
    ///
    /// Uses the approximate 365/30-day breakdown (see the module docs).
    /// Leading zero-valued units are omitted, the days component always
    /// appears, English unit names take an `s` only when the count exceeds
    /// one, and the Nepali locale transliterates the numerals.
    ///
    /// # Errors
    /// As [`Converter::diff`].
    pub fn human_diff(
        &self,
        date1: &str,
        date2: &str,
        calendar: Calendar,
        locale: Locale,
    ) -> Result<String, DateError> {
        let a = self.resolve_ad(date1, calendar)?;
        let b = self.resolve_ad(date2, calendar)?;
        let total = (civil_days(b.year(), b.month(), b.day())
            - civil_days(a.year(), a.month(), a.day()))
        .abs();

        let years = total / HUMAN_DAYS_PER_YEAR;
        let rem = total % HUMAN_DAYS_PER_YEAR;
        let months = rem / HUMAN_DAYS_PER_MONTH;
        let days = rem % HUMAN_DAYS_PER_MONTH;

        let units: [(i64, &str, &str); 3] = [
            (years, "year", "वर्ष"),
            (months, "month", "महिना"),
            (days, "day", "दिन"),
        ];

        let mut parts: Vec<String> = Vec::new();
        for (i, &(count, en, ne)) in units.iter().enumerate() {
            let is_days = i == units.len() - 1;
            if parts.is_empty() && count == 0 && !is_days {
                continue;
            }
            parts.push(match locale {
                Locale::English => {
                    if count > 1 {
                        format!("{count} {en}s")
                    } else {
                        format!("{count} {en}")
                    }
                }
                Locale::Nepali => {
                    format!("{} {}", transliterate_digits(&count.to_string()), ne)
                }
            });
        }
        Ok(parts.join(", "))
    }
}
