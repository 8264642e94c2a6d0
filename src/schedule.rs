//! Date-ordered card schedule grown in whole-deck blocks.
//!
//! Every block is one full permutation of the deck laid over consecutive days,
//! so any run of `2n - 1` days holds at least one whole block and therefore
//! every card.

use serde::Serialize;
use tracing::{debug, error};

use crate::consts::MAX_PADDED_ENTRIES;
use crate::shuffle::DateShuffler;
use crate::{CalendarConfig, CalendarDate, CalendarError, DateError};

/// A card assigned to one day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry<C> {
    pub date:       CalendarDate,
    /// Fixed when the entry is created; does not follow the wall clock.
    pub is_today:   bool,
    /// Position of `card` in the deck.
    pub deck_index: usize,
    pub card:       C,
}

/// Smallest window length guaranteed to contain every card of an `n`-card deck.
pub const fn coverage_window(deck_len: usize) -> usize {
    deck_len.saturating_mul(2).saturating_sub(1)
}

/// Whether every deck position `0..deck_len` appears somewhere in `window`.
pub fn window_covers_deck<C>(window: &[ScheduleEntry<C>], deck_len: usize) -> bool {
    let mut seen = vec![false; deck_len];
    for entry in window {
        if let Some(slot) = seen.get_mut(entry.deck_index) {
            *slot = true;
        }
    }
    seen.into_iter().all(|s| s)
}

/// The scheduling engine and the schedule it owns.
///
/// Entries are only ever appended or prepended, never reordered or removed.
/// Prepending shifts indices, so callers holding a position should re-resolve
/// it by date (or via [`Calendar::index_of_today`]) after `extend_backward`.
#[derive(Debug, Clone)]
pub struct Calendar<C> {
    deck:                Vec<C>,
    today:               CalendarDate,
    begin_date:          CalendarDate,
    shuffler:            DateShuffler,
    /// `None` once the schedule ends on 9999-12-31.
    next_scheduled_date: Option<CalendarDate>,
    schedule:            Vec<ScheduleEntry<C>>,
}

impl<C: Clone> Calendar<C> {
    /// Builds a calendar and pads it until it contains today's entry.
    ///
    /// One block is laid from the begin date forward, one block directly before
    /// it, then forward blocks until "today" shows up. An empty deck yields an
    /// empty schedule with no today entry.
    ///
    /// # Errors
    /// - `CalendarError::Date` if the host clock is unusable or a block would
    ///   leave years 1..=9999.
    /// - `CalendarError::TodayNotReached` if today lies before the padded
    ///   schedule, so forward padding can never meet it.
    #[tracing::instrument(skip(deck), fields(deck_len = deck.len()))]
    pub fn new(deck: Vec<C>, config: CalendarConfig) -> Result<Self, CalendarError> {
        let today = match config.today() {
            Some(today) => today,
            None => CalendarDate::today()?,
        };

        let mut calendar = Self {
            deck,
            today,
            begin_date: config.begin_date(),
            shuffler: DateShuffler::new(config.hash_seed()),
            next_scheduled_date: Some(config.begin_date()),
            schedule: Vec::new(),
        };

        calendar.extend_forward()?;
        calendar.extend_backward()?;
        calendar.pad_until_today()?;
        Ok(calendar)
    }

    /// Appends one block starting the day after the current last entry.
    ///
    /// # Errors
    /// Returns `CalendarError::Date` if the block would run past 9999-12-31.
    pub fn extend_forward(&mut self) -> Result<(), CalendarError> {
        let Some(start) = self.next_scheduled_date else {
            let from = self.last_date().unwrap_or(self.begin_date);
            return Err(DateError::OutOfRange { from, offset: 1 }.into());
        };
        let block = self.build_block(start)?;

        debug!(%start, len = block.len(), "appending block");
        self.next_scheduled_date = match block.last() {
            Some(entry) => entry.date.next_day(),
            None => Some(start),
        };
        self.schedule.extend(block);
        Ok(())
    }

    /// Prepends one block ending the day before the current first entry.
    ///
    /// The block's permutation is derived from its own start date, exactly as a
    /// forward block starting there would be.
    ///
    /// # Errors
    /// Returns `CalendarError::Date` if the block would start before 0001-01-01.
    pub fn extend_backward(&mut self) -> Result<(), CalendarError> {
        if self.deck.is_empty() {
            return Ok(());
        }

        let Some(first) = self.first_date().or(self.next_scheduled_date) else {
            return Ok(());
        };
        let start = first.jump_days(-self.block_span())?;
        let block = self.build_block(start)?;

        debug!(%start, len = block.len(), "prepending block");
        self.schedule.splice(0..0, block);
        Ok(())
    }

    /// Scans forward for today's entry, appending blocks whenever the scan
    /// reaches the end of the schedule.
    fn pad_until_today(&mut self) -> Result<(), CalendarError> {
        if self.deck.is_empty() {
            debug!("empty deck, schedule has no today entry");
            return Ok(());
        }

        let mut scanned = 0;
        while scanned < MAX_PADDED_ENTRIES {
            if self.schedule.get(scanned).is_some_and(|entry| entry.is_today) {
                return Ok(());
            }
            scanned += 1;
            if scanned == self.schedule.len() {
                self.extend_forward()?;
            }
        }

        error!(
            today = %self.today,
            begin_date = %self.begin_date,
            scanned,
            "today never reached while padding schedule"
        );
        Err(CalendarError::TodayNotReached {
            today: self.today,
            begin_date: self.begin_date,
            scanned,
        })
    }

    fn build_block(&self, start: CalendarDate) -> Result<Vec<ScheduleEntry<C>>, DateError> {
        let permutation = self.shuffler.permutation(start, self.deck.len())?;

        // The permutation already consumed one draw per day of the block, so
        // `start.days()` cannot run dry before it.
        Ok(start
            .days()
            .zip(permutation)
            .map(|(date, deck_index)| ScheduleEntry {
                date,
                is_today: date == self.today,
                deck_index,
                card: self.deck[deck_index].clone(),
            })
            .collect())
    }
}

impl<C> Calendar<C> {
    /// Index of the entry marked as today, by linear scan.
    pub fn index_of_today(&self) -> Option<usize> {
        self.schedule.iter().position(|entry| entry.is_today)
    }

    pub fn today_entry(&self) -> Option<&ScheduleEntry<C>> {
        self.schedule.iter().find(|entry| entry.is_today)
    }

    /// The schedule, ordered by strictly increasing, gap-free dates.
    pub fn entries(&self) -> &[ScheduleEntry<C>] {
        &self.schedule
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }

    pub fn deck(&self) -> &[C] {
        &self.deck
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn begin_date(&self) -> CalendarDate {
        self.begin_date
    }

    pub const fn hash_seed(&self) -> u32 {
        self.shuffler.hash_seed()
    }

    /// Start date of the next forward block, `None` once the schedule reaches 9999-12-31.
    pub const fn next_scheduled_date(&self) -> Option<CalendarDate> {
        self.next_scheduled_date
    }

    pub fn first_date(&self) -> Option<CalendarDate> {
        self.schedule.first().map(|entry| entry.date)
    }

    pub fn last_date(&self) -> Option<CalendarDate> {
        self.schedule.last().map(|entry| entry.date)
    }

    /// Whether every `window_size`-day run of the schedule shows every card.
    ///
    /// Trivially true when the schedule is shorter than the window.
    pub fn guarantee_holds(&self, window_size: usize) -> bool {
        if window_size == 0 {
            return self.deck.is_empty();
        }
        self.schedule
            .windows(window_size)
            .all(|window| window_covers_deck(window, self.deck.len()))
    }

    fn block_span(&self) -> i64 {
        i64::try_from(self.deck.len()).unwrap_or(i64::MAX)
    }
}
