/// Maximum structurally valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December in AD, Chaitra in BS)
pub const MAX_MONTH: u8 = 12;

/// Largest month length either calendar produces (BS months reach 32 days)
pub const MAX_DAY: u8 = 32;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Gregorian days per month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// The fixed anchor pair from which every conversion is derived:
/// BS 2062-01-01 fell on AD 2005-04-14.
pub const ANCHOR_BS: (u16, u8, u8) = (2062, 1, 1);
/// AD side of the anchor pair.
pub const ANCHOR_AD: (u16, u8, u8) = (2005, 4, 14);

/// Format token replaced by the zero-padded 4-digit year
pub const TOKEN_YEAR: char = 'Y';
/// Format token replaced by the zero-padded 2-digit month
pub const TOKEN_MONTH: char = 'm';
/// Format token replaced by the zero-padded 2-digit day
pub const TOKEN_DAY: char = 'd';
/// Format token replaced by the month name
pub const TOKEN_MONTH_NAME: char = 'F';
/// Format token replaced by the weekday name
pub const TOKEN_WEEKDAY: char = 'l';
