//! Shorthand constructors for unit tests.

use crate::types::{Month, Year};
use crate::{Calendar, CalendarConfig, CalendarDate, Card};

pub fn year(value: u16) -> Year {
    Year::new(value).expect("test year must be valid")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("test month must be valid")
}

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("test date must be valid")
}

/// Three-card deck shared by the schedule fixtures.
pub fn mock_cards() -> Vec<Card> {
    vec![
        Card::new("One", "The first point", 1, "First, do something."),
        Card::new("Two", "The second point", 2, "Regard something."),
        Card::new("Two", "The second point", 3, "Examine something"),
    ]
}

/// Today 2025-01-02, first block at 2025-01-01, default seed.
pub fn mock_config() -> CalendarConfig {
    CalendarConfig::new()
        .with_today(date(2025, 1, 2))
        .with_begin_date(date(2025, 1, 1))
}

pub fn mock_calendar() -> Calendar<Card> {
    Calendar::new(mock_cards(), mock_config()).expect("mock calendar must build")
}
