use std::iter::FusedIterator;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::consts::{
    DATE_SEPARATOR, DECEMBER, DEFAULT_BEGIN_DAY, DEFAULT_BEGIN_MONTH, DEFAULT_BEGIN_YEAR, JANUARY,
    MAX_YEAR, MIN_DAY,
};
use crate::prelude::*;
use crate::types::{days_in_month, Day, Month, Year};
use crate::DateError;

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A validated day in the proleptic Gregorian calendar.
///
/// Equality is structural (year, month, day) and ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Where the schedule's first forward block starts unless configured otherwise.
pub const DEFAULT_BEGIN_DATE: CalendarDate = CalendarDate {
    year:  Year::from_const(DEFAULT_BEGIN_YEAR),
    month: Month::from_const(DEFAULT_BEGIN_MONTH),
    day:   Day::from_const(DEFAULT_BEGIN_DAY),
};

impl CalendarDate {
    /// Creates a date, validating every component against the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth` or `InvalidDay` for the
    /// first component that does not exist.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// The host's current local date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the host clock reports a year outside 1..=9999.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// The following calendar day, or `None` after 9999-12-31.
    pub fn next_day(&self) -> Option<Self> {
        let (year, month, day) = next_day(self.year(), self.month(), self.day())?;
        // Components come from calendar rollover, so they are already valid.
        Self::new(year, month, day).ok()
    }

    /// The preceding calendar day, or `None` before 0001-01-01.
    pub fn prev_day(&self) -> Option<Self> {
        self.jump_days(-1).ok()
    }

    /// Moves `offset` days forward (positive) or backward (negative).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result falls outside 0001-01-01..=9999-12-31.
    pub fn jump_days(&self, offset: i64) -> Result<Self, DateError> {
        let out_of_range = || DateError::OutOfRange { from: *self, offset };
        let delta = TimeDelta::try_days(offset).ok_or_else(out_of_range)?;
        let target = self
            .to_naive()
            .checked_add_signed(delta)
            .ok_or_else(out_of_range)?;
        Self::try_from(target).map_err(|_| out_of_range())
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.to_naive().signed_duration_since(self.to_naive()).num_days()
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn day_number(&self) -> i64 {
        i64::from(self.to_naive().num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }

    /// Inverse of [`CalendarDate::day_number`]; `None` outside years 1..=9999.
    pub fn from_day_number(days: i64) -> Option<Self> {
        let days_from_ce = i32::try_from(days.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?).ok()?;
        let naive = NaiveDate::from_num_days_from_ce_opt(days_from_ce)?;
        Self::try_from(naive).ok()
    }

    /// The same day as a chrono date.
    pub fn to_naive(&self) -> NaiveDate {
        // Every validated year/month/day is inside chrono's range.
        NaiveDate::from_ymd_opt(i32::from(self.year()), u32::from(self.month()), u32::from(self.day()))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Every day from `self` onward, ending after 9999-12-31.
    pub fn days(self) -> Days {
        Days { next: Some(self) }
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        DEFAULT_BEGIN_DATE
    }
}

/// Iterator over consecutive calendar days, see [`CalendarDate::days`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<CalendarDate>,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_day();
        Some(current)
    }
}

impl FusedIterator for Days {}

// --- calendar rollover helpers ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    if month == DECEMBER {
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    if day < days_in_month(year, month) {
        Some((year, month, day + 1))
    } else {
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    #[allow(clippy::cast_possible_truncation)]
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| DateError::InvalidYear(date.year()))?;
        // chrono months are 1..=12 and days 1..=31.
        Self::new(year, date.month() as u8, date.day() as u8)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses strict ISO `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
                parts.len()
            )));
        };

        Self::new(parse_component(year)?, parse_component(month)?, parse_component(day)?)
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    s.parse::<T>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_validates_components() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert_eq!(CalendarDate::new(0, 1, 1), Err(DateError::InvalidYear(0)));
        assert_eq!(CalendarDate::new(2024, 13, 1), Err(DateError::InvalidMonth(13)));
        assert_eq!(
            CalendarDate::new(2023, 2, 29),
            Err(DateError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            })
        );
    }

    #[test]
    fn test_accessors() {
        let d = date(2025, 1, 18);
        assert_eq!((d.year(), d.month(), d.day()), (2025, 1, 18));
        assert_eq!(d.year_typed().get(), 2025);
        assert_eq!(d.month_typed().get(), 1);
        assert_eq!(d.day_typed().get(), 18);
    }

    #[test]
    fn test_default_begin_date() {
        assert_eq!(DEFAULT_BEGIN_DATE, date(2025, 1, 18));
        assert_eq!(CalendarDate::default(), DEFAULT_BEGIN_DATE);
    }

    #[test]
    fn test_next_day_cases() {
        struct TestCase {
            from:        CalendarDate,
            expected:    CalendarDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        date(2000, 2, 28),
                expected:    date(2000, 2, 29),
                description: "leap day in a year divisible by 400",
            },
            TestCase {
                from:        date(2000, 2, 29),
                expected:    date(2000, 3, 1),
                description: "leap day rolls into March",
            },
            TestCase {
                from:        date(2000, 3, 1),
                expected:    date(2000, 3, 2),
                description: "plain increment",
            },
            TestCase {
                from:        date(1900, 2, 28),
                expected:    date(1900, 3, 1),
                description: "century year without leap day",
            },
            TestCase {
                from:        date(2000, 12, 31),
                expected:    date(2001, 1, 1),
                description: "year rollover",
            },
            TestCase {
                from:        date(2025, 4, 30),
                expected:    date(2025, 5, 1),
                description: "30-day month rollover",
            },
        ];

        for case in &cases {
            assert_eq!(
                case.from.next_day(),
                Some(case.expected),
                "{} ({})",
                case.from,
                case.description
            );
            assert_eq!(case.from.jump_days(1), Ok(case.expected));
        }
    }

    #[test]
    fn test_next_day_at_upper_limit() {
        assert_eq!(date(9999, 12, 31).next_day(), None);
        assert_eq!(date(1, 1, 1).prev_day(), None);
    }

    #[test]
    fn test_jump_days_backward() {
        assert_eq!(date(2000, 1, 1).jump_days(-1), Ok(date(1999, 12, 31)));
        assert_eq!(date(2000, 1, 2).jump_days(-4), Ok(date(1999, 12, 29)));
        assert_eq!(date(2025, 1, 1).jump_days(-3), Ok(date(2024, 12, 29)));
        assert_eq!(date(2000, 3, 1).prev_day(), Some(date(2000, 2, 29)));
    }

    #[test]
    fn test_jump_days_large_offsets() {
        assert_eq!(date(2000, 1, 1).jump_days(0), Ok(date(2000, 1, 1)));
        assert_eq!(date(2000, 1, 1).jump_days(366), Ok(date(2001, 1, 1)));
        assert_eq!(date(1970, 1, 1).jump_days(10_957), Ok(date(2000, 1, 1)));
        assert_eq!(date(2024, 12, 26).jump_days(-10_957 - 9_126), Ok(date(1970, 1, 1)));
    }

    #[test]
    fn test_jump_days_out_of_range() {
        let from = date(9999, 12, 30);
        assert_eq!(
            from.jump_days(2),
            Err(DateError::OutOfRange { from, offset: 2 })
        );

        let from = date(1, 1, 1);
        assert_eq!(
            from.jump_days(i64::MIN),
            Err(DateError::OutOfRange {
                from,
                offset: i64::MIN
            })
        );
    }

    #[test]
    fn test_day_number_anchors() {
        assert_eq!(date(1970, 1, 1).day_number(), 0);
        assert_eq!(date(2000, 1, 1).day_number(), 10_957);
        assert_eq!(date(2025, 1, 18).day_number(), 20_106);
        assert_eq!(date(1, 1, 1).day_number(), -719_162);
        assert_eq!(date(9999, 12, 31).day_number(), 2_932_896);
    }

    #[test]
    fn test_day_number_round_trips_across_leap_cycle() {
        // Four full years including a leap day.
        let start = date(1999, 12, 1);
        for (offset, day) in start.days().take(1_500).enumerate() {
            let n = day.day_number();
            assert_eq!(CalendarDate::from_day_number(n), Some(day));
            assert_eq!(start.days_until(&day), offset as i64);
        }
        assert_eq!(CalendarDate::from_day_number(2_932_897), None);
        assert_eq!(CalendarDate::from_day_number(-719_163), None);
        assert_eq!(CalendarDate::from_day_number(i64::MAX), None);
    }

    #[test]
    fn test_days_iterator_ends_at_upper_limit() {
        let tail: Vec<_> = date(9999, 12, 30).days().collect();
        assert_eq!(tail, vec![date(9999, 12, 30), date(9999, 12, 31)]);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(1999, 12, 31) < date(2000, 1, 1));
        assert!(date(2000, 1, 31) < date(2000, 2, 1));
        assert!(date(2000, 2, 1) < date(2000, 2, 2));
    }

    #[test]
    fn test_structural_equality() {
        let a = CalendarDate::new(2025, 1, 2).unwrap();
        let b: CalendarDate = "2025-01-02".parse().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, date(2025, 1, 3));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2025, 1, 2).to_string(), "2025-01-02");
        assert_eq!(date(1, 1, 1).to_string(), "0001-01-01");
    }

    #[test]
    fn test_parse() {
        assert_eq!("2000-02-29".parse::<CalendarDate>(), Ok(date(2000, 2, 29)));
        assert_eq!(" 2000-2-9 ".parse::<CalendarDate>(), Ok(date(2000, 2, 9)));
        assert_eq!("".parse::<CalendarDate>(), Err(DateError::EmptyInput));
        assert!(matches!(
            "2000-02".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2000-02-XX".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1900-02-29".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            "02/29/2000".parse::<CalendarDate>(),
            Err(DateError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_naive_round_trip() {
        for day in date(2024, 2, 27).days().take(5) {
            assert_eq!(CalendarDate::try_from(day.to_naive()), Ok(day));
        }
        assert_eq!(date(1, 1, 1).to_naive(), NaiveDate::from_ymd_opt(1, 1, 1).unwrap());
        assert_eq!(date(9999, 12, 31).to_naive(), NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());
    }

    #[test]
    fn test_jump_days_past_lower_limit() {
        let from = date(1, 1, 3);
        assert_eq!(from.jump_days(-2), Ok(date(1, 1, 1)));
        assert_eq!(from.jump_days(-3), Err(DateError::OutOfRange { from, offset: -3 }));
        assert_eq!(from.jump_days(i64::MAX), Err(DateError::OutOfRange { from, offset: i64::MAX }));
    }

    #[test]
    fn test_try_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(CalendarDate::try_from(naive), Ok(date(2024, 2, 29)));

        let naive = NaiveDate::from_ymd_opt(-5, 1, 1).unwrap();
        assert_eq!(CalendarDate::try_from(naive), Err(DateError::InvalidYear(-5)));
    }

    #[test]
    fn test_today_is_valid() {
        let today = CalendarDate::today().unwrap();
        assert!(today.year() >= 2024);
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2024, 12, 29);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2024-12-29""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());
    }
}
