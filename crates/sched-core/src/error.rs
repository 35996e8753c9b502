//! Error values shared by the strict parsers and range validation.

use thiserror::Error;

/// Errors raised while validating or strictly parsing schedule values.
///
/// Lenient parsers (clock values, time slots, weekday slots) never produce
/// these; they fall back to the zero value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A date range was validated without a start date.
    #[error("from is required")]
    FromRequired,

    /// A date range ends before it starts.
    #[error("until can not be before from")]
    PastUntil,

    /// A weekday name did not match any day of the week.
    #[error("invalid day name: {name}")]
    InvalidDayName { name: String },

    /// A date string was not in `YYYY-MM-DD` form.
    #[error("can not parse date, must use yyyy-mm-dd format: {value}")]
    InvalidDateString { value: String },
}
