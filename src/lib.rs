//! Deterministic day-by-day schedule of lojong cards.
//!
//! Each calendar day gets one card. The schedule grows in whole-deck blocks,
//! each block a permutation derived only from its start date and a hash seed,
//! so any `2n - 1` consecutive days show every card of an `n`-card deck.
//!
//! ```
//! use lojong_calendar::{Calendar, CalendarConfig, CalendarDate};
//!
//! let config = CalendarConfig::new()
//!     .with_today(CalendarDate::new(2025, 1, 2).unwrap())
//!     .with_begin_date(CalendarDate::new(2025, 1, 1).unwrap());
//! let mut calendar = Calendar::new(vec!["a", "b", "c"], config).unwrap();
//! assert_eq!(calendar.index_of_today(), Some(4));
//!
//! calendar.extend_backward().unwrap();
//! assert_eq!(calendar.index_of_today(), Some(7));
//! ```

mod card;
mod config;
mod consts;
mod date;
mod error;
mod hash;
mod prelude;
mod schedule;
mod shuffle;
#[cfg(test)]
mod test_utils;
mod types;

pub use card::Card;
pub use config::CalendarConfig;
pub use consts::*;
pub use date::{CalendarDate, Days, DEFAULT_BEGIN_DATE};
pub use error::{CalendarError, DateError};
pub use hash::hashlittle;
pub use schedule::{coverage_window, window_covers_deck, Calendar, ScheduleEntry};
pub use shuffle::{date_hash_key, derive_permutation, DateDraws, DateShuffler, Draw};
pub use types::{days_in_month, is_leap_year, Day, Month, Year};
