//! Construction options for a [`Calendar`](crate::Calendar).

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_HASH_SEED;
use crate::date::DEFAULT_BEGIN_DATE;
use crate::CalendarDate;

/// Inputs that pin down a schedule: the anchor "today", the first block's
/// start date, and the hash seed.
///
/// Every field is optional in serialized form, missing ones take the defaults.
///
/// # Example
///
/// ```
/// use lojong_calendar::{CalendarConfig, CalendarDate};
///
/// let config = CalendarConfig::new()
///     .with_today("2025-01-02".parse().unwrap())
///     .with_begin_date(CalendarDate::new(2025, 1, 1).unwrap())
///     .with_hash_seed(7);
/// assert_eq!(config.hash_seed(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalendarConfig {
    today:      Option<CalendarDate>,
    begin_date: CalendarDate,
    hash_seed:  u32,
}

impl CalendarConfig {
    /// Defaults: `today` read from the host clock at construction,
    /// `begin_date = 2025-01-18`, `hash_seed = 0`.
    pub const fn new() -> Self {
        Self {
            today:      None,
            begin_date: DEFAULT_BEGIN_DATE,
            hash_seed:  DEFAULT_HASH_SEED,
        }
    }

    /// Pins "today" instead of reading the host clock.
    pub const fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }

    pub const fn with_begin_date(mut self, begin_date: CalendarDate) -> Self {
        self.begin_date = begin_date;
        self
    }

    pub const fn with_hash_seed(mut self, hash_seed: u32) -> Self {
        self.hash_seed = hash_seed;
        self
    }

    // --- Accessors ---

    pub const fn today(&self) -> Option<CalendarDate> {
        self.today
    }

    pub const fn begin_date(&self) -> CalendarDate {
        self.begin_date
    }

    pub const fn hash_seed(&self) -> u32 {
        self.hash_seed
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}
