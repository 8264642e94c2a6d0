use crate::{CalendarDate, MAX_MONTH, MAX_YEAR, MIN_YEAR};

/// Error type for building and stepping calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Empty date string")]
    EmptyInput,

    /// Stepping `offset` days from `from` leaves the supported year range.
    #[error("Date out of range: {from} {offset:+} days")]
    OutOfRange { from: CalendarDate, offset: i64 },
}

/// Error type for schedule construction and extension.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error(transparent)]
    Date(#[from] DateError),

    /// Forward padding from `begin_date` scanned the whole entry budget without
    /// meeting `today`. Only possible when `today` precedes the padded schedule.
    #[error("Today ({today}) not reached after scanning {scanned} entries from {begin_date}")]
    TodayNotReached {
        today:      CalendarDate,
        begin_date: CalendarDate,
        scanned:    usize,
    },
}
