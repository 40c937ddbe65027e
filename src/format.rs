//! Locale-aware rendering: digit transliteration, month and weekday name
//! tables, and the `Y`/`m`/`d`/`F`/`l` token formatter.

use crate::consts::{TOKEN_DAY, TOKEN_MONTH, TOKEN_MONTH_NAME, TOKEN_WEEKDAY, TOKEN_YEAR};
use crate::converter::Converter;
use crate::date::{AdDate, BsDate};
use crate::days::{civil_days, weekday_index};
use crate::error::DateError;
use serde::{Deserialize, Serialize};

/// Output locale for formatted dates and human-readable diffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Latin digits, English or romanized names.
    #[serde(rename = "en")]
    English,
    /// Devanagari digits and Nepali names.
    #[serde(rename = "np")]
    Nepali,
}

/// Devanagari numerals, indexed by the decimal digit they replace.
pub(crate) const NEPALI_DIGITS: [&str; 10] =
    ["०", "१", "२", "३", "४", "५", "६", "७", "८", "९"];

/// BS month names in Nepali, Baisakh through Chaitra.
pub(crate) const BS_MONTHS_NE: [&str; 12] = [
    "वैशाख",
    "जेठ",
    "असार",
    "साउन",
    "भदौ",
    "असोज",
    "कात्तिक",
    "मंसिर",
    "पुस",
    "माघ",
    "फागुन",
    "चैत",
];

/// Romanized BS month names.
pub(crate) const BS_MONTHS_EN: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadau", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Gregorian month names.
pub(crate) const GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, 0 = Sunday.
pub(crate) const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Nepali weekday names, 0 = Sunday (आइतवार).
pub(crate) const WEEKDAYS_NE: [&str; 7] = [
    "आइतवार",
    "सोमवार",
    "मङ्गलवार",
    "बुधवार",
    "बिहिवार",
    "शुक्रवार",
    "शनिवार",
];

/// Replaces every ASCII digit with its Devanagari numeral; everything else
/// passes through.
pub(crate) fn transliterate_digits(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for ch in s.chars() {
        match ch.to_digit(10) {
            Some(d) => out.push_str(NEPALI_DIGITS[d as usize]),
            None => out.push(ch),
        }
    }
    out
}

/// Weekday name for an index in 0..=6 (0 = Sunday).
pub(crate) fn weekday_name(index: usize, locale: Locale) -> &'static str {
    debug_assert!(index < 7);
    match locale {
        Locale::English => WEEKDAYS_EN[index],
        Locale::Nepali => WEEKDAYS_NE[index],
    }
}

/// Resolved replacement values for one date in one locale.
struct FormatParts<'a> {
    year: String,
    month: String,
    day: String,
    month_name: &'a str,
    weekday: &'a str,
}

/// Single-pass token substitution. Replacement text is never re-scanned,
/// so a month name containing a token character stays intact.
fn substitute(template: &str, parts: &FormatParts<'_>) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    for ch in template.chars() {
        match ch {
            TOKEN_YEAR => out.push_str(&parts.year),
            TOKEN_MONTH => out.push_str(&parts.month),
            TOKEN_DAY => out.push_str(&parts.day),
            TOKEN_MONTH_NAME => out.push_str(parts.month_name),
            TOKEN_WEEKDAY => out.push_str(parts.weekday),
            _ => out.push(ch),
        }
    }
    out
}

impl Converter {
    /// Formats a BS date per `template` and `locale`.
    ///
    /// The input accepts the loose digit forms of [`crate::normalize`]. The
    /// weekday comes from the date's AD equivalent. Tokens: `Y` year, `m`
    /// month, `d` day (zero-padded), `F` month name, `l` weekday name.
    ///
    /// # Errors
    /// [`DateError::InvalidDate`] when the input fails validation.
    pub fn format_bs(
        &self,
        input: &str,
        template: &str,
        locale: Locale,
    ) -> Result<String, DateError> {
        let bs = BsDate::parse_loose(input)?;
        let canonical = bs.to_string();
        if !self.is_valid_bs(&canonical) {
            return Err(DateError::InvalidDate(canonical));
        }
        let ad = self.bs_to_ad(&bs)?;
        let wd = weekday_index(civil_days(ad.year(), ad.month(), ad.day()));
        let month_idx = bs.month() as usize - 1;

        let parts = match locale {
            Locale::English => FormatParts {
                year: format!("{:04}", bs.year()),
                month: format!("{:02}", bs.month()),
                day: format!("{:02}", bs.day()),
                month_name: BS_MONTHS_EN[month_idx],
                weekday: WEEKDAYS_EN[wd],
            },
            Locale::Nepali => FormatParts {
                year: transliterate_digits(&format!("{:04}", bs.year())),
                month: transliterate_digits(&format!("{:02}", bs.month())),
                day: transliterate_digits(&format!("{:02}", bs.day())),
                month_name: BS_MONTHS_NE[month_idx],
                weekday: WEEKDAYS_NE[wd],
            },
        };
        Ok(substitute(template, &parts))
    }

    /// Formats an AD date per `template` and `locale`.
    ///
    /// The English locale renders the Gregorian components and names. The
    /// Nepali locale first converts to BS and renders the BS components
    /// with Devanagari digits and Nepali month names; the weekday always
    /// reflects the underlying civil day.
    ///
    /// # Errors
    /// [`DateError::InvalidDate`] when the input fails validation.
    pub fn format_ad(
        &self,
        input: &str,
        template: &str,
        locale: Locale,
    ) -> Result<String, DateError> {
        let ad = AdDate::parse_loose(input)?;
        let canonical = ad.to_string();
        if !self.is_valid_ad(&canonical) {
            return Err(DateError::InvalidDate(canonical));
        }
        let wd = weekday_index(civil_days(ad.year(), ad.month(), ad.day()));

        let parts = match locale {
            Locale::English => FormatParts {
                year: format!("{:04}", ad.year()),
                month: format!("{:02}", ad.month()),
                day: format!("{:02}", ad.day()),
                month_name: GREGORIAN_MONTHS[ad.month() as usize - 1],
                weekday: WEEKDAYS_EN[wd],
            },
            Locale::Nepali => {
                let bs = self.ad_to_bs(&ad)?;
                FormatParts {
                    year: transliterate_digits(&format!("{:04}", bs.year())),
                    month: transliterate_digits(&format!("{:02}", bs.month())),
                    day: transliterate_digits(&format!("{:02}", bs.day())),
                    month_name: BS_MONTHS_NE[bs.month() as usize - 1],
                    weekday: WEEKDAYS_NE[wd],
                }
            }
        };
        Ok(substitute(template, &parts))
    }

    /// Renders a BS date as "year month-name day, weekday" in Nepali
    /// script, e.g. `२०६२ वैशाख ०१, बिहिवार`.
    ///
    /// # Errors
    /// Propagates conversion failures for dates whose AD equivalent cannot
    /// be resolved.
    pub fn to_nepali_human(&self, bs: &BsDate) -> Result<String, DateError> {
        let ad = self.bs_to_ad(bs)?;
        let wd = weekday_index(civil_days(ad.year(), ad.month(), ad.day()));
        Ok(format!(
            "{} {} {}, {}",
            transliterate_digits(&format!("{:04}", bs.year())),
            BS_MONTHS_NE[bs.month() as usize - 1],
            transliterate_digits(&format!("{:02}", bs.day())),
            WEEKDAYS_NE[wd],
        ))
    }
}

impl BsDate {
    /// `YYYY/MM/DD` rendered with Devanagari digits.
    pub fn to_nepali_digits(&self) -> String {
        transliterate_digits(&format!(
            "{:04}/{:02}/{:02}",
            self.year(),
            self.month(),
            self.day()
        ))
    }
}
