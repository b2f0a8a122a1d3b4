//! Query and analytics methods for HabitData
//!
//! Streaks are recomputed on every call; nothing is cached on the habits.

use chrono::NaiveDateTime;

use super::habit_data::HabitData;
use super::record::{Habit, Periodicity};

impl HabitData {
    /// Habits with the given periodicity, in insertion order
    pub fn by_periodicity(&self, periodicity: Periodicity) -> Vec<&Habit> {
        self.habits
            .iter()
            .filter(|h| h.periodicity == periodicity)
            .collect()
    }

    /// Each habit paired with its current streak
    pub fn streaks(&self, now: NaiveDateTime) -> Vec<(&Habit, u32)> {
        self.habits.iter().map(|h| (h, h.streak(now))).collect()
    }

    /// The habit with the longest current streak
    ///
    /// Ties keep the habit added first. Returns `None` if there are no habits.
    pub fn longest_streak(&self, now: NaiveDateTime) -> Option<(&Habit, u32)> {
        self.streaks(now)
            .into_iter()
            .fold(None, |best, (habit, streak)| match best {
                Some((_, best_streak)) if best_streak >= streak => best,
                _ => Some((habit, streak)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 12)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn days_ago(n: u64) -> NaiveDateTime {
        now().checked_sub_days(Days::new(n)).unwrap()
    }

    fn sample_data() -> HabitData {
        let mut data = HabitData::new();
        data.create("Read", Periodicity::Daily, days_ago(30)).unwrap();
        data.create("Exercise", Periodicity::Weekly, days_ago(30)).unwrap();
        data.create("Pay Bills", Periodicity::Monthly, days_ago(30)).unwrap();
        data
    }

    #[test]
    fn test_by_periodicity() {
        let data = sample_data();

        let daily = data.by_periodicity(Periodicity::Daily);
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].name, "Read");

        let weekly = data.by_periodicity(Periodicity::Weekly);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].name, "Exercise");

        let monthly = data.by_periodicity(Periodicity::Monthly);
        assert_eq!(monthly.len(), 1);
        assert_eq!(monthly[0].name, "Pay Bills");
    }

    #[test]
    fn test_longest_streak() {
        let mut data = sample_data();
        for n in 0..5 {
            data.complete("Read", days_ago(n)).unwrap();
        }
        for n in 0..3 {
            data.complete("Exercise", days_ago(n * 7)).unwrap();
        }

        let (habit, streak) = data.longest_streak(now()).unwrap();
        assert_eq!(habit.name, "Read");
        assert_eq!(streak, 5);
    }

    #[test]
    fn test_longest_streak_tie_keeps_first() {
        let mut data = sample_data();
        data.complete("Exercise", now()).unwrap();
        data.complete("Pay Bills", now()).unwrap();

        let (habit, streak) = data.longest_streak(now()).unwrap();
        assert_eq!(habit.name, "Exercise");
        assert_eq!(streak, 1);
    }

    #[test]
    fn test_longest_streak_all_zero_returns_first_habit() {
        let data = sample_data();
        let (habit, streak) = data.longest_streak(now()).unwrap();
        assert_eq!(habit.name, "Read");
        assert_eq!(streak, 0);
    }

    #[test]
    fn test_longest_streak_empty() {
        assert!(HabitData::new().longest_streak(now()).is_none());
    }
}
