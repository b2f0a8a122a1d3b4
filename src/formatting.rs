//! Formatting helper functions for the habit MCP server
//!
//! This module contains formatting logic for displaying habits and streaks.

use crate::habit::Habit;
use chrono::NaiveDateTime;

/// Format a timestamp for display (minute precision)
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Format habits into a display string
///
/// # Arguments
/// * `habits` - Habits to format, in display order
/// * `now` - Reference moment for the streak shown alongside each habit
///
/// # Returns
/// Formatted string representation of the habits
pub fn format_habits(habits: &[&Habit], now: NaiveDateTime) -> String {
    if habits.is_empty() {
        return "No habits found".to_string();
    }

    let mut result = format!("Found {} habit(s):\n\n", habits.len());
    for habit in habits {
        result.push_str(&format!(
            "- {} (periodicity: {}, completions: {}, streak: {})\n",
            habit.name,
            habit.periodicity,
            habit.completions.len(),
            habit.streak(now)
        ));
        result.push_str(&format!("  Created: {}\n", format_timestamp(&habit.created_at)));
        if let Some(last) = habit.completions.iter().max() {
            result.push_str(&format!("  Last completed: {}\n", format_timestamp(last)));
        }
    }

    result
}

/// Format the streak message for a single habit
pub fn format_streak(habit: &Habit, streak: u32) -> String {
    format!("Habit '{}' has a current streak of {}.", habit.name, streak)
}
