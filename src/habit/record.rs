use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::HabitError;
use super::streak;

/// Get the current moment as local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// How often a habit is expected to recur
///
/// Uses lowercase naming to match the persisted format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    /// Once per calendar day
    Daily,
    /// Once per ISO week (Monday to Sunday)
    Weekly,
    /// Once per calendar month
    Monthly,
}

impl Periodicity {
    /// All recognized periodicities, in display order
    pub const ALL: [Periodicity; 3] = [Periodicity::Daily, Periodicity::Weekly, Periodicity::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
            Periodicity::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            "monthly" => Ok(Periodicity::Monthly),
            _ => Err(HabitError::UnsupportedPeriodicity(s.to_string())),
        }
    }
}

/// A single tracked habit
///
/// Completions are append-only; the order they are stored in carries no meaning
/// for streak purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Display name, stored exactly as entered
    pub name: String,
    /// Expected cadence
    pub periodicity: Periodicity,
    /// When the habit was created (informational)
    pub created_at: NaiveDateTime,
    /// Moments the habit was marked complete
    #[serde(default)]
    pub completions: Vec<NaiveDateTime>,
}

impl Habit {
    /// Create a habit with no completions
    pub fn new(name: impl Into<String>, periodicity: Periodicity, created_at: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            periodicity,
            created_at,
            completions: Vec::new(),
        }
    }

    /// Record a completion
    pub fn add_completion(&mut self, at: NaiveDateTime) {
        self.completions.push(at);
    }

    /// Current streak relative to `now`
    pub fn streak(&self, now: NaiveDateTime) -> u32 {
        streak::compute_streak(self.periodicity, &self.completions, now)
    }

    /// Check whether this habit answers to `name` (trimmed, case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }
}

/// Normalize a habit name for comparison
///
/// The stored name is never rewritten; this is only applied at lookup time.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_periodicity_from_str() {
        assert_eq!("daily".parse::<Periodicity>().unwrap(), Periodicity::Daily);
        assert_eq!(" Weekly ".parse::<Periodicity>().unwrap(), Periodicity::Weekly);
        assert_eq!("MONTHLY".parse::<Periodicity>().unwrap(), Periodicity::Monthly);
    }

    #[test]
    fn test_periodicity_from_str_rejects_unknown() {
        let err = "yearly".parse::<Periodicity>().unwrap_err();
        assert_eq!(err, HabitError::UnsupportedPeriodicity("yearly".to_string()));
    }

    #[test]
    fn test_periodicity_display_roundtrips_through_from_str() {
        for periodicity in Periodicity::ALL {
            assert_eq!(periodicity.to_string().parse::<Periodicity>().unwrap(), periodicity);
        }
    }

    #[test]
    fn test_new_habit_has_no_completions() {
        let habit = Habit::new("Read", Periodicity::Daily, at(2025, 3, 1));
        assert_eq!(habit.name, "Read");
        assert!(habit.completions.is_empty());
        assert_eq!(habit.streak(at(2025, 3, 1)), 0);
    }

    #[test]
    fn test_add_completion_appends() {
        let mut habit = Habit::new("Read", Periodicity::Daily, at(2025, 3, 1));
        habit.add_completion(at(2025, 3, 1));
        habit.add_completion(at(2025, 3, 2));
        assert_eq!(habit.completions, vec![at(2025, 3, 1), at(2025, 3, 2)]);
        assert_eq!(habit.streak(at(2025, 3, 2)), 2);
    }

    #[test]
    fn test_matches_name_ignores_case_and_whitespace() {
        let habit = Habit::new("Morning Run", Periodicity::Daily, at(2025, 3, 1));
        assert!(habit.matches_name("morning run"));
        assert!(habit.matches_name("  MORNING RUN "));
        assert!(!habit.matches_name("evening run"));
        // stored name is left untouched
        assert_eq!(habit.name, "Morning Run");
    }
}
