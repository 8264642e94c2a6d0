//! Date-keyed deterministic shuffling.
//!
//! A permutation for date `D` is a Fisher–Yates shuffle whose `k`-th swap is
//! driven by the hash of date `D + k`. Nothing is carried between calls apart
//! from the hash seed, so any permutation can be re-derived from its start date.

use std::iter::FusedIterator;

use tracing::trace;

use crate::consts::{DEFAULT_HASH_SEED, HASH_SCALE};
use crate::hash::hashlittle;
use crate::{CalendarDate, DateError};

/// Four-byte hash key for a date: `[year_hi, year_lo, month, day]`.
pub const fn date_hash_key(date: &CalendarDate) -> [u8; 4] {
    let [year_hi, year_lo] = date.year_typed().to_be_bytes();
    [year_hi, year_lo, date.month(), date.day()]
}

/// One pseudo-random value in `[0, 1]` and the date it was hashed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Draw {
    pub date:  CalendarDate,
    pub value: f64,
}

/// Lazy sequence of draws over consecutive days, restartable from any date.
#[derive(Debug, Clone)]
pub struct DateDraws {
    cursor:    Option<CalendarDate>,
    hash_seed: u32,
}

impl DateDraws {
    pub const fn new(start: CalendarDate, hash_seed: u32) -> Self {
        Self {
            cursor: Some(start),
            hash_seed,
        }
    }

    /// Date the next draw will be hashed from, `None` once past 9999-12-31.
    pub const fn cursor(&self) -> Option<CalendarDate> {
        self.cursor
    }

    /// The draw for a single date, independent of any iterator state.
    pub fn draw_at(date: &CalendarDate, hash_seed: u32) -> f64 {
        f64::from(hashlittle(&date_hash_key(date), hash_seed)) / HASH_SCALE
    }
}

impl Iterator for DateDraws {
    type Item = Draw;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.cursor?;
        self.cursor = date.next_day();
        let value = Self::draw_at(&date, self.hash_seed);
        trace!(%date, value, "date draw");
        Some(Draw { date, value })
    }
}

impl FusedIterator for DateDraws {}

/// Produces the deterministic deck permutation for each start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateShuffler {
    hash_seed: u32,
}

impl Default for DateShuffler {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_SEED)
    }
}

impl DateShuffler {
    pub const fn new(hash_seed: u32) -> Self {
        Self { hash_seed }
    }

    pub const fn hash_seed(&self) -> u32 {
        self.hash_seed
    }

    /// Draws starting at `start`.
    pub const fn draws(&self, start: CalendarDate) -> DateDraws {
        DateDraws::new(start, self.hash_seed)
    }

    /// Permutation of `0..n` for `start`, consuming one draw per swap.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the draws would need a day past 9999-12-31.
    pub fn permutation(&self, start: CalendarDate, n: usize) -> Result<Vec<usize>, DateError> {
        let mut indices: Vec<usize> = (0..n).collect();
        let mut draws = self.draws(start);

        for current in (1..=n).rev() {
            let draw = draws.next().ok_or_else(|| DateError::OutOfRange {
                from:   start,
                offset: i64::try_from(n - current).unwrap_or(i64::MAX),
            })?;
            indices.swap(current - 1, pick_index(draw.value, current));
        }

        Ok(indices)
    }
}

/// Derives the permutation of `0..n` for `date` under `hash_seed`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the draws would need a day past 9999-12-31.
pub fn derive_permutation(date: CalendarDate, n: usize, hash_seed: u32) -> Result<Vec<usize>, DateError> {
    DateShuffler::new(hash_seed).permutation(date, n)
}

/// `floor(value * bound)`, kept below `bound` for the single draw equal to 1.0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn pick_index(value: f64, bound: usize) -> usize {
    ((value * bound as f64).floor() as usize).min(bound - 1)
}
