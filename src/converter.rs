use crate::consts::{ANCHOR_AD, ANCHOR_BS};
use crate::date::{AdDate, BsDate};
use crate::days::{bs_days_since, civil_days, weekday_index, ymd_from_civil};
use crate::error::DateError;
use crate::format::{weekday_name, Locale};
use crate::table::{self, BS_BASE_YEAR};
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// The conversion engine: an immutable context carrying the configured
/// start year. All state is constructor-injected; independently configured
/// instances coexist, and a value is freely shared across threads.
///
/// Every conversion is day-offset arithmetic against the fixed anchor pair
/// BS 2062-01-01 / AD 2005-04-14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    start_year: u16,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// The record returned by [`Converter::bs_info`] / [`Converter::ad_info`].
///
/// `day_of_year`, `total_days_in_year`, and `diff_days_from_today` are
/// computed in BS day-count space; `weekday` is the English weekday name of
/// the underlying civil day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub bs: String,
    pub ad: String,
    pub weekday: String,
    pub total_days_in_year: u16,
    pub day_of_year: u16,
    pub diff_days_from_today: i64,
}

impl Converter {
    /// A converter spanning the whole calendar table.
    pub fn new() -> Self {
        Self {
            start_year: BS_BASE_YEAR,
        }
    }

    /// A converter whose earliest supported BS year is `start_year`,
    /// clamped so it never precedes the table's base year.
    ///
    /// Dates before the start year fail with
    /// [`DateError::YearOutOfRange`]; a start year after the anchor year
    /// (2062 BS) leaves nothing convertible.
    pub fn with_start_year(start_year: u16) -> Self {
        Self {
            start_year: start_year.max(BS_BASE_YEAR),
        }
    }

    /// The effective earliest supported BS year.
    pub fn start_year(&self) -> u16 {
        self.start_year
    }

    /// Converts a BS date to its AD equivalent.
    ///
    /// The signed day offset between `bs` and the BS anchor (both measured
    /// from the configured start year, so the base cancels) is applied to
    /// the AD anchor in civil-day space.
    ///
    /// # Errors
    /// [`DateError::YearOutOfRange`] when the span from the start year
    /// touches a year outside the table.
    pub fn bs_to_ad(&self, bs: &BsDate) -> Result<AdDate, DateError> {
        let anchor_total =
            bs_days_since(self.start_year, ANCHOR_BS.0, ANCHOR_BS.1, ANCHOR_BS.2)?;
        let target_total = bs_days_since(self.start_year, bs.year(), bs.month(), bs.day())?;
        let offset = target_total - anchor_total;

        let anchor_civil = civil_days(ANCHOR_AD.0, ANCHOR_AD.1, ANCHOR_AD.2);
        let (y, m, d) = ymd_from_civil(anchor_civil + offset);
        Ok(AdDate::new(y, m, d)?)
    }

    /// Converts an AD date to its BS equivalent.
    ///
    /// The signed civil-day offset from the AD anchor (calendar-day
    /// arithmetic, no timezones) is walked off one day at a time from the
    /// BS anchor, with the table's month lengths driving rollover and
    /// rollunder. A zero offset returns the anchor unchanged.
    ///
    /// # Errors
    /// [`DateError::YearOutOfRange`] when the walk leaves the table.
    pub fn ad_to_bs(&self, ad: &AdDate) -> Result<BsDate, DateError> {
        let anchor_civil = civil_days(ANCHOR_AD.0, ANCHOR_AD.1, ANCHOR_AD.2);
        let mut diff = civil_days(ad.year(), ad.month(), ad.day()) - anchor_civil;

        let (mut by, mut bm, mut bd) = ANCHOR_BS;
        while diff != 0 {
            if diff > 0 {
                let month_len = table::month_days(by, bm)?;
                bd += 1;
                if u16::from(bd) > month_len {
                    bd = 1;
                    bm += 1;
                    if bm > 12 {
                        bm = 1;
                        by += 1;
                    }
                }
                diff -= 1;
            } else {
                bd -= 1;
                if bd < 1 {
                    if bm == 1 {
                        bm = 12;
                        by -= 1;
                    } else {
                        bm -= 1;
                    }
                    // Rollunder lands on the last day of the new month.
                    let month_len = table::month_days(by, bm)?;
                    bd = u8::try_from(month_len)
                        .map_err(|_| DateError::YearOutOfRange { year: by })?;
                }
                diff += 1;
            }
        }
        BsDate::new(by, bm, bd)
    }

    /// String-level [`Converter::bs_to_ad`]: accepts loose digit input and
    /// returns `YYYY-MM-DD`.
    ///
    /// # Errors
    /// As [`Converter::bs_to_ad`], plus parse failures.
    pub fn bs_to_ad_str(&self, input: &str) -> Result<String, DateError> {
        let bs = BsDate::parse_loose(input)?;
        Ok(self.bs_to_ad(&bs)?.to_string())
    }

    /// String-level [`Converter::ad_to_bs`]: accepts loose digit input and
    /// returns `YYYY-MM-DD`.
    ///
    /// # Errors
    /// As [`Converter::ad_to_bs`], plus parse failures.
    pub fn ad_to_bs_str(&self, input: &str) -> Result<String, DateError> {
        let ad = AdDate::parse_loose(input).map_err(DateError::from)?;
        Ok(self.ad_to_bs(&ad)?.to_string())
    }

    /// Whether `input` is a valid BS date string.
    ///
    /// Requires the exact `YYYY-MM-DD` shape, a month in 1..=12, a day
    /// within the table's month length, and a round trip through AD that
    /// reproduces the input exactly. Never raises; conversion failures
    /// yield `false`.
    pub fn is_valid_bs(&self, input: &str) -> bool {
        let Ok(bs) = input.parse::<BsDate>() else {
            return false;
        };
        match self.bs_to_ad(&bs).and_then(|ad| self.ad_to_bs(&ad)) {
            Ok(back) => back.to_string() == input,
            Err(_) => false,
        }
    }

    /// Whether `input` is a valid AD date string.
    ///
    /// Requires the exact `YYYY-MM-DD` shape, a real Gregorian date, and a
    /// round trip through BS that reproduces the input exactly. Never
    /// raises; conversion failures yield `false`.
    pub fn is_valid_ad(&self, input: &str) -> bool {
        let Ok(ad) = input.parse::<AdDate>() else {
            return false;
        };
        match self.ad_to_bs(&ad).and_then(|bs| self.bs_to_ad(&bs)) {
            Ok(back) => back.to_string() == input,
            Err(_) => false,
        }
    }

    /// Localized weekday name of an AD date (loose input accepted).
    ///
    /// # Errors
    /// Parse failures only; the weekday itself is total.
    pub fn weekday_ad(&self, input: &str, locale: Locale) -> Result<&'static str, DateError> {
        let ad = AdDate::parse_loose(input).map_err(DateError::from)?;
        let wd = weekday_index(civil_days(ad.year(), ad.month(), ad.day()));
        Ok(weekday_name(wd, locale))
    }

    /// Localized weekday name of a BS date, resolved through its AD
    /// equivalent (the weekday belongs to the civil day, not the label).
    ///
    /// # Errors
    /// As [`Converter::bs_to_ad`], plus parse failures.
    pub fn weekday_bs(&self, input: &str, locale: Locale) -> Result<&'static str, DateError> {
        let bs = BsDate::parse_loose(input)?;
        let ad = self.bs_to_ad(&bs)?;
        let wd = weekday_index(civil_days(ad.year(), ad.month(), ad.day()));
        Ok(weekday_name(wd, locale))
    }

    /// Full info for a BS date string with an explicit "today". `None`
    /// when the input is invalid.
    pub fn bs_info_as_of(&self, input: &str, today: &AdDate) -> Option<DateInfo> {
        if !self.is_valid_bs(input) {
            return None;
        }
        let bs = input.parse::<BsDate>().ok()?;
        self.info_for(&bs, today).ok()
    }

    /// Full info for a BS date string, "today" read from the system clock.
    /// `None` when the input is invalid.
    pub fn bs_info(&self, input: &str) -> Option<DateInfo> {
        let today = today_ad().ok()?;
        self.bs_info_as_of(input, &today)
    }

    /// Full info for an AD date string with an explicit "today"; the
    /// year-relative figures describe the converted BS date. `None` when
    /// the input is invalid.
    pub fn ad_info_as_of(&self, input: &str, today: &AdDate) -> Option<DateInfo> {
        if !self.is_valid_ad(input) {
            return None;
        }
        let ad = input.parse::<AdDate>().ok()?;
        let bs = self.ad_to_bs(&ad).ok()?;
        self.info_for(&bs, today).ok()
    }

    /// Full info for an AD date string, "today" read from the system
    /// clock. `None` when the input is invalid.
    pub fn ad_info(&self, input: &str) -> Option<DateInfo> {
        let today = today_ad().ok()?;
        self.ad_info_as_of(input, &today)
    }

    fn info_for(&self, bs: &BsDate, today: &AdDate) -> Result<DateInfo, DateError> {
        let ad = self.bs_to_ad(bs)?;
        let total_days_in_year = table::total_days(bs.year())?;

        let target_total = bs_days_since(self.start_year, bs.year(), bs.month(), bs.day())?;
        let year_start_total = bs_days_since(self.start_year, bs.year(), 1, 1)?;
        let day_of_year = u16::try_from(target_total - year_start_total + 1)
            .map_err(|_| DateError::InvalidDate(bs.to_string()))?;

        let today_bs = self.ad_to_bs(today)?;
        let today_total = bs_days_since(
            self.start_year,
            today_bs.year(),
            today_bs.month(),
            today_bs.day(),
        )?;
        let diff_days_from_today = target_total - today_total;

        let wd = weekday_index(civil_days(ad.year(), ad.month(), ad.day()));
        Ok(DateInfo {
            bs: bs.to_string(),
            ad: ad.to_string(),
            weekday: weekday_name(wd, Locale::English).to_owned(),
            total_days_in_year,
            day_of_year,
            diff_days_from_today,
        })
    }
}

/// Today's AD date from the system clock (civil date, UTC day boundary).
fn today_ad() -> Result<AdDate, DateError> {
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_secs() / 86_400).unwrap_or(0));
    let (y, m, d) = ymd_from_civil(days);
    Ok(AdDate::new(y, m, d)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::BS_MAX_YEAR;

    #[test]
    fn anchor_converts_to_itself() {
        let conv = Converter::new();
        assert_eq!(conv.bs_to_ad_str("2062-01-01").unwrap(), "2005-04-14");
        assert_eq!(conv.ad_to_bs_str("2005-04-14").unwrap(), "2062-01-01");
    }

    #[test]
    fn known_correspondences() {
        let conv = Converter::new();
        // Baisakh 2062 has 30 days, so 2062-02-02 is 31 days past the anchor.
        assert_eq!(conv.bs_to_ad_str("2062-02-02").unwrap(), "2005-05-15");
        assert_eq!(conv.bs_to_ad_str("2056-04-13").unwrap(), "1999-07-29");
        assert_eq!(conv.ad_to_bs_str("1999-07-29").unwrap(), "2056-04-13");
        assert_eq!(conv.ad_to_bs_str("1944-01-01").unwrap(), "2000-09-17");
        assert_eq!(conv.ad_to_bs_str("2011-06-12").unwrap(), "2068-02-29");
        assert_eq!(conv.bs_to_ad_str("2070-01-01").unwrap(), "2013-04-14");
    }

    #[test]
    fn loose_input_is_accepted_by_conversion() {
        let conv = Converter::new();
        assert_eq!(conv.bs_to_ad_str("20620101").unwrap(), "2005-04-14");
        assert_eq!(conv.ad_to_bs_str("2005414").unwrap(), "2062-01-01");
    }

    #[test]
    fn supported_range_edges() {
        let conv = Converter::new();
        // First and last representable BS days.
        assert_eq!(conv.bs_to_ad_str("1970-01-01").unwrap(), "1913-04-14");
        assert_eq!(conv.bs_to_ad_str("2100-12-30").unwrap(), "2044-04-12");
        assert_eq!(conv.ad_to_bs_str("1913-04-14").unwrap(), "1970-01-01");
        assert_eq!(conv.ad_to_bs_str("2044-04-12").unwrap(), "2100-12-30");
    }

    #[test]
    fn one_day_beyond_either_edge_fails() {
        let conv = Converter::new();
        assert!(matches!(
            conv.ad_to_bs_str("1913-04-13"),
            Err(DateError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            conv.ad_to_bs_str("2044-04-13"),
            Err(DateError::YearOutOfRange { .. })
        ));
        assert!(matches!(
            conv.bs_to_ad_str("2101-01-01"),
            Err(DateError::YearOutOfRange { year: 2101 })
        ));
    }

    #[test]
    fn round_trip_across_year_boundaries() {
        let conv = Converter::new();
        // 800 consecutive civil days spanning the 2062/2063 rollover.
        let start = civil_days(2005, 1, 1);
        for offset in 0..800 {
            let (y, m, d) = ymd_from_civil(start + offset);
            let ad = AdDate::new(y, m, d).unwrap();
            let bs = conv.ad_to_bs(&ad).unwrap();
            assert_eq!(conv.bs_to_ad(&bs).unwrap(), ad, "round trip failed at {ad}");
        }
    }

    #[test]
    fn monotonicity_one_ad_day_is_one_bs_day() {
        let conv = Converter::new();
        let start = civil_days(2004, 12, 1);
        let mut prev = None;
        for offset in 0..200 {
            let (y, m, d) = ymd_from_civil(start + offset);
            let ad = AdDate::new(y, m, d).unwrap();
            let bs = conv.ad_to_bs(&ad).unwrap();
            let total = bs_days_since(BS_BASE_YEAR, bs.year(), bs.month(), bs.day()).unwrap();
            if let Some(prev_total) = prev {
                assert_eq!(total, prev_total + 1, "BS did not advance by one at {ad}");
            }
            prev = Some(total);
        }
    }

    #[test]
    fn every_day_of_an_anchor_adjacent_year_round_trips() {
        let conv = Converter::new();
        for month in 1..=12u8 {
            let len = table::month_days(2062, month).unwrap();
            for day in 1..=len {
                let bs = BsDate::new(2062, month, u8::try_from(day).unwrap()).unwrap();
                let ad = conv.bs_to_ad(&bs).unwrap();
                assert_eq!(conv.ad_to_bs(&ad).unwrap(), bs);
            }
        }
    }

    #[test]
    fn validators_accept_and_reject() {
        let conv = Converter::new();
        assert!(conv.is_valid_bs("2062-01-01"));
        assert!(conv.is_valid_bs("2056-04-31"));
        assert!(!conv.is_valid_bs("2062-09-30"));
        assert!(!conv.is_valid_bs("2062-13-01"));
        assert!(!conv.is_valid_bs("1969-01-01"));
        // Strict shape only; loose digits are for the conversion entry points.
        assert!(!conv.is_valid_bs("20620101"));
        assert!(!conv.is_valid_bs("2062-1-01"));

        assert!(conv.is_valid_ad("2005-04-14"));
        assert!(conv.is_valid_ad("2000-02-29"));
        assert!(!conv.is_valid_ad("2021-02-29"));
        assert!(!conv.is_valid_ad("2005-00-14"));
    }

    #[test]
    fn validator_catches_conversion_failures() {
        let conv = Converter::new();
        // Structurally fine, but the round trip leaves the table.
        assert!(!conv.is_valid_ad("1900-01-01"));
        assert!(!conv.is_valid_ad("2050-01-01"));
    }

    #[test]
    fn start_year_is_clamped_to_table_base() {
        assert_eq!(Converter::with_start_year(1950).start_year(), 1970);
        assert_eq!(Converter::with_start_year(2000).start_year(), 2000);
    }

    #[test]
    fn start_year_trims_the_valid_range() {
        let trimmed = Converter::with_start_year(2000);
        let full = Converter::new();

        assert!(full.is_valid_bs("1995-01-01"));
        assert!(!trimmed.is_valid_bs("1995-01-01"));

        // Above the start year both agree.
        assert_eq!(
            trimmed.bs_to_ad_str("2062-01-01").unwrap(),
            full.bs_to_ad_str("2062-01-01").unwrap()
        );
        assert_eq!(
            trimmed.ad_to_bs_str("2011-06-12").unwrap(),
            full.ad_to_bs_str("2011-06-12").unwrap()
        );
    }

    #[test]
    fn weekday_queries() {
        let conv = Converter::new();
        assert_eq!(
            conv.weekday_ad("2005-04-14", Locale::English).unwrap(),
            "Thursday"
        );
        assert_eq!(
            conv.weekday_ad("2005-04-14", Locale::Nepali).unwrap(),
            "बिहिवार"
        );
        assert_eq!(
            conv.weekday_bs("2062-01-01", Locale::English).unwrap(),
            "Thursday"
        );
        assert_eq!(
            conv.weekday_bs("2062-02-02", Locale::English).unwrap(),
            "Sunday"
        );
    }

    #[test]
    fn bs_info_record() {
        let conv = Converter::new();
        let today = AdDate::new(2013, 6, 29).unwrap();
        let info = conv.bs_info_as_of("2070-03-15", &today).unwrap();
        assert_eq!(info.bs, "2070-03-15");
        assert_eq!(info.ad, "2013-06-29");
        assert_eq!(info.weekday, "Saturday");
        assert_eq!(info.total_days_in_year, 365);
        assert_eq!(info.day_of_year, 77);
        assert_eq!(info.diff_days_from_today, 0);
    }

    #[test]
    fn info_diff_days_sign() {
        let conv = Converter::new();
        let today = AdDate::new(2013, 6, 28).unwrap();
        let info = conv.bs_info_as_of("2070-03-15", &today).unwrap();
        assert_eq!(info.diff_days_from_today, 1);

        let later = AdDate::new(2013, 7, 9).unwrap();
        let info = conv.bs_info_as_of("2070-03-15", &later).unwrap();
        assert_eq!(info.diff_days_from_today, -10);
    }

    #[test]
    fn ad_info_record_describes_the_bs_year() {
        let conv = Converter::new();
        let today = AdDate::new(2013, 6, 29).unwrap();
        let info = conv.ad_info_as_of("2013-06-29", &today).unwrap();
        assert_eq!(info.bs, "2070-03-15");
        assert_eq!(info.ad, "2013-06-29");
        assert_eq!(info.weekday, "Saturday");
        assert_eq!(info.day_of_year, 77);
        assert_eq!(info.diff_days_from_today, 0);
    }

    #[test]
    fn info_is_absent_for_invalid_input() {
        let conv = Converter::new();
        let today = AdDate::new(2013, 6, 29).unwrap();
        assert!(conv.bs_info_as_of("2062-09-30", &today).is_none());
        assert!(conv.bs_info_as_of("not a date", &today).is_none());
        assert!(conv.ad_info_as_of("2021-02-29", &today).is_none());
    }

    #[test]
    fn info_serializes_with_stable_keys() {
        let conv = Converter::new();
        let today = AdDate::new(2013, 6, 29).unwrap();
        let info = conv.bs_info_as_of("2070-03-15", &today).unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["bs"], "2070-03-15");
        assert_eq!(json["ad"], "2013-06-29");
        assert_eq!(json["weekday"], "Saturday");
        assert_eq!(json["total_days_in_year"], 365);
        assert_eq!(json["day_of_year"], 77);
        assert_eq!(json["diff_days_from_today"], 0);
    }

    #[test]
    fn last_table_year_is_reported() {
        assert_eq!(BS_MAX_YEAR, 2100);
    }
}
