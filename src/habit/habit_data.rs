use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::error::HabitError;
use super::record::{Habit, Periodicity, normalize_name};

/// Current format version written to storage
pub const FORMAT_VERSION: u32 = 1;

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

/// All tracked habits, in insertion order
///
/// Lookups scan linearly by normalized name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitData {
    /// Format version of the storage file
    #[serde(default = "default_format_version")]
    pub format_version: u32,

    #[serde(default)]
    pub(crate) habits: Vec<Habit>,
}

impl Default for HabitData {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            habits: Vec::new(),
        }
    }
}

impl HabitData {
    /// Create a new empty HabitData instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from habits loaded elsewhere
    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self {
            habits,
            ..Self::default()
        }
    }

    /// Number of habits
    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// All habits in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Add a habit
    ///
    /// # Errors
    /// - `HabitError::EmptyName` if the name is blank
    /// - `HabitError::DuplicateName` if a habit with the same normalized name exists
    pub fn add(&mut self, habit: Habit) -> Result<(), HabitError> {
        if habit.name.trim().is_empty() {
            return Err(HabitError::EmptyName);
        }
        if let Some(existing) = self.find_by_name(&habit.name) {
            return Err(HabitError::DuplicateName(existing.name.clone()));
        }
        self.habits.push(habit);
        Ok(())
    }

    /// Create and add a new habit with no completions
    pub fn create(
        &mut self,
        name: &str,
        periodicity: Periodicity,
        created_at: NaiveDateTime,
    ) -> Result<(), HabitError> {
        self.add(Habit::new(name, periodicity, created_at))
    }

    /// Find a habit by name, ignoring case and surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Habit> {
        let wanted = normalize_name(name);
        self.habits
            .iter()
            .find(|h| normalize_name(&h.name) == wanted)
    }

    /// Find a habit by name and return a mutable reference
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Habit> {
        let wanted = normalize_name(name);
        self.habits
            .iter_mut()
            .find(|h| normalize_name(&h.name) == wanted)
    }

    /// Mark a habit complete at the given moment
    ///
    /// # Returns
    /// The completed habit, or `HabitError::NotFound`
    pub fn complete(&mut self, name: &str, at: NaiveDateTime) -> Result<&Habit, HabitError> {
        let habit = self
            .find_by_name_mut(name)
            .ok_or_else(|| HabitError::NotFound(name.trim().to_string()))?;
        habit.add_completion(at);
        Ok(habit)
    }
}
