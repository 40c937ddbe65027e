use crate::error::DateError;

/// First BS year covered by the calendar table.
pub const BS_BASE_YEAR: u16 = 1970;

/// Last BS year covered by the calendar table (inclusive).
pub const BS_MAX_YEAR: u16 = BS_BASE_YEAR + BS_YEARS.len() as u16 - 1;

/// Per-year month lengths for the Bikram Sambat calendar.
///
/// Row `i` describes BS year `BS_BASE_YEAR + i`: entries 0-11 are the twelve
/// month lengths in days, entry 12 the total days in that year. The rows are
/// contiguous; a lookup outside the range is an error, never a default.
const BS_YEARS: [[u16; 13]; 131] = [
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 30, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 29, 30, 365],
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31, 366],
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30, 365],
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30, 365],
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30, 366],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30, 366],
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30, 365],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30, 366],
    [30, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30, 366],
    [30, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30, 364],
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 30, 30, 30, 366],
    [31, 31, 32, 31, 31, 31, 29, 30, 29, 30, 29, 31, 365],
    [31, 31, 32, 31, 31, 31, 30, 29, 29, 30, 30, 30, 365],
    [31, 32, 31, 32, 30, 31, 30, 29, 30, 29, 30, 30, 365],
];

/// Whether `year` is covered by the table.
pub const fn is_supported(year: u16) -> bool {
    year >= BS_BASE_YEAR && year <= BS_MAX_YEAR
}

/// The full 13-entry row for `year`.
///
/// # Errors
/// Returns [`DateError::YearOutOfRange`] when `year` is not in the table.
pub(crate) fn year_entry(year: u16) -> Result<&'static [u16; 13], DateError> {
    if !is_supported(year) {
        return Err(DateError::YearOutOfRange { year });
    }
    Ok(&BS_YEARS[(year - BS_BASE_YEAR) as usize])
}

/// Length in days of `month` (1..=12) in BS `year`.
///
/// # Errors
/// Returns [`DateError::YearOutOfRange`] when `year` is not in the table.
pub fn month_days(year: u16, month: u8) -> Result<u16, DateError> {
    debug_assert!(month != 0 && month <= 12);
    Ok(year_entry(year)?[month as usize - 1])
}

/// Total days in BS `year` (the stored 13th entry).
///
/// # Errors
/// Returns [`DateError::YearOutOfRange`] when `year` is not in the table.
pub fn total_days(year: u16) -> Result<u16, DateError> {
    Ok(year_entry(year)?[12])
}
