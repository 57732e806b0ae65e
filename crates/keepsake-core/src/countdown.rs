//! Countdown engine for a recurring annual date.
//!
//! Pure projection from a wall-clock instant to the time remaining until the
//! next occurrence of a month/day target, plus the elapsed fraction of the
//! current annual cycle. The UI re-evaluates [`CountdownSnapshot::at`] once
//! per second; nothing here holds state or touches the clock itself.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::KeepsakeError;

/// A recurring annual target, e.g. month 11 / day 12 for a November 12
/// birthday. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnualDate {
    month: u32,
    day: u32,
}

impl AnnualDate {
    /// Create a target date. `month` is 1-12, `day` must exist in at least
    /// one calendar year (so Feb 29 is accepted).
    pub fn new(month: u32, day: u32) -> Result<Self, KeepsakeError> {
        // Validate against a leap year so Feb 29 passes.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(KeepsakeError::InvalidDate { month, day });
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Midnight of this target in the given year.
    ///
    /// Leap-day policy: a Feb 29 target in a non-leap year rolls forward to
    /// March 1.
    pub fn occurrence_in(&self, year: i32) -> NaiveDateTime {
        let date = match NaiveDate::from_ymd_opt(year, self.month, self.day) {
            Some(d) => d,
            None => NaiveDate::from_ymd_opt(year, 3, 1)
                .expect("March 1 exists in every year"),
        };
        date.and_time(NaiveTime::MIN)
    }

    /// The soonest occurrence strictly after `now`. A candidate at or before
    /// `now` (including `now` exactly at midnight of the target) bumps to the
    /// following year.
    pub fn next_occurrence(&self, now: NaiveDateTime) -> NaiveDateTime {
        let candidate = self.occurrence_in(now.year());
        if candidate <= now {
            self.occurrence_in(now.year() + 1)
        } else {
            candidate
        }
    }

    /// The most recent occurrence at or before `now`.
    pub fn previous_occurrence(&self, now: NaiveDateTime) -> NaiveDateTime {
        let candidate = self.occurrence_in(now.year());
        if candidate <= now {
            candidate
        } else {
            self.occurrence_in(now.year() - 1)
        }
    }
}

/// A non-negative duration decomposed into whole days/hours/minutes/seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
}

impl Breakdown {
    /// Greedy decomposition of `later - earlier`, clamped to zero when the
    /// instants are out of order.
    pub fn between(later: NaiveDateTime, earlier: NaiveDateTime) -> Self {
        let total_seconds = later.signed_duration_since(earlier).num_seconds().max(0);
        Self {
            days: total_seconds / 86_400,
            hours: (total_seconds % 86_400) / 3_600,
            minutes: (total_seconds % 3_600) / 60,
            seconds: total_seconds % 60,
            total_seconds,
        }
    }
}

/// Everything the countdown view needs for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountdownSnapshot {
    /// Time remaining until the next occurrence.
    pub to_next: Breakdown,
    /// Length of the current annual cycle (previous to next occurrence).
    pub cycle: Breakdown,
    /// `to_next / cycle`, in `[0, 1]`.
    pub remaining_fraction: f64,
    /// `1 - remaining_fraction`.
    pub elapsed_fraction: f64,
}

impl CountdownSnapshot {
    /// Project the countdown state for a given instant.
    pub fn at(target: AnnualDate, now: NaiveDateTime) -> Self {
        let next = target.next_occurrence(now);
        let prev = target.previous_occurrence(now);
        let to_next = Breakdown::between(next, now);
        let cycle = Breakdown::between(next, prev);
        let remaining_fraction = if cycle.total_seconds > 0 {
            to_next.total_seconds as f64 / cycle.total_seconds as f64
        } else {
            0.0
        };
        Self {
            to_next,
            cycle,
            remaining_fraction,
            elapsed_fraction: 1.0 - remaining_fraction,
        }
    }
}
