use crate::date::ParseError;

/// Error type for conversion, formatting, and diff operations.
///
/// Structural parse failures are wrapped [`ParseError`]s; the other variants
/// cover calendar-table misses and dates that fail round-trip validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A year was requested that the calendar table does not cover. Raised
    /// for the target year and for any gap hit while summing whole years.
    #[error("year {year} is outside the supported calendar table")]
    YearOutOfRange {
        /// The unsupported year.
        year: u16,
    },

    /// The date parsed but is not a real date in its calendar, or failed
    /// round-trip validation.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Structural parse failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
