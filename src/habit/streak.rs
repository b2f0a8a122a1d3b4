//! Streak calculation
//!
//! A streak is the number of consecutive calendar periods, ending at the period
//! that contains `now`, in which a habit was completed at least once.
//!
//! Periods are compared as keys (date, ISO year-week, year-month) rather than
//! as durations: months vary in length and ISO weeks can belong to a different
//! year than the dates they contain, so subtracting fixed durations gives wrong
//! answers at boundaries.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

use super::error::HabitError;
use super::record::Periodicity;

/// Calendar period a completion falls into
///
/// Ordering within a variant is chronological. Keys of different variants are
/// never compared by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PeriodKey {
    Day(NaiveDate),
    Week { year: i32, week: u32 },
    Month { year: i32, month: u32 },
}

impl PeriodKey {
    /// Reduce a timestamp to the period it belongs to
    pub fn of(periodicity: Periodicity, at: NaiveDateTime) -> Self {
        let date = at.date();
        match periodicity {
            Periodicity::Daily => PeriodKey::Day(date),
            Periodicity::Weekly => {
                let iso = date.iso_week();
                PeriodKey::Week {
                    year: iso.year(),
                    week: iso.week(),
                }
            }
            Periodicity::Monthly => PeriodKey::Month {
                year: date.year(),
                month: date.month(),
            },
        }
    }

    /// The key `periods` periods before this one
    ///
    /// Returns `None` only when the result falls outside chrono's date range.
    pub fn back(self, periods: u32) -> Option<Self> {
        match self {
            PeriodKey::Day(date) => date
                .checked_sub_days(Days::new(u64::from(periods)))
                .map(PeriodKey::Day),
            PeriodKey::Week { year, week } => {
                let mut year = year;
                let mut week = i64::from(week) - i64::from(periods);
                while week < 1 {
                    year -= 1;
                    week += i64::from(iso_weeks_in_year(year)?);
                }
                Some(PeriodKey::Week {
                    year,
                    week: u32::try_from(week).ok()?,
                })
            }
            PeriodKey::Month { year, month } => {
                let total = i64::from(year) * 12 + i64::from(month) - 1 - i64::from(periods);
                Some(PeriodKey::Month {
                    year: i32::try_from(total.div_euclid(12)).ok()?,
                    month: u32::try_from(total.rem_euclid(12) + 1).ok()?,
                })
            }
        }
    }
}

/// Number of ISO weeks (52 or 53) in an ISO week-numbering year
///
/// December 28 always lies in the last ISO week of its year.
pub fn iso_weeks_in_year(year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, 12, 28).map(|d| d.iso_week().week())
}

/// Compute the current streak for a set of completions
///
/// Completions may be unordered and may repeat within a period. The streak only
/// counts if it includes the period containing `now` and runs back from it
/// without a gap.
pub fn compute_streak(
    periodicity: Periodicity,
    completions: &[NaiveDateTime],
    now: NaiveDateTime,
) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let keys: BTreeSet<PeriodKey> = completions
        .iter()
        .map(|at| PeriodKey::of(periodicity, *at))
        .collect();
    let current = PeriodKey::of(periodicity, now);

    let mut streak = 0;
    // Newest first; the offset of each key from `current` equals the streak so far
    for key in keys.iter().rev() {
        match current.back(streak) {
            Some(expected) if expected == *key => streak += 1,
            _ => break,
        }
    }
    streak
}

/// Compute a streak from an unparsed periodicity string
///
/// # Errors
/// Returns `HabitError::UnsupportedPeriodicity` when `periodicity` is not one of
/// daily, weekly or monthly.
pub fn compute_streak_for(
    periodicity: &str,
    completions: &[NaiveDateTime],
    now: NaiveDateTime,
) -> Result<u32, HabitError> {
    let periodicity: Periodicity = periodicity.parse()?;
    Ok(compute_streak(periodicity, completions, now))
}
