//! Streak handlers for the habit MCP server

use crate::HabitServerHandler;
use crate::formatting;
use crate::habit::HabitError;
use crate::validation;
use mcp_attr::Result as McpResult;

impl HabitServerHandler {
    /// Recomputes the streak of one habit against the current moment.
    pub async fn handle_get_streak(&self, name: String) -> McpResult<String> {
        let now = self.now();
        let data = self.lock_data();
        let habit = data
            .find_by_name(&name)
            .ok_or_else(|| validation::habit_error(HabitError::NotFound(name.trim().to_string())))?;
        Ok(formatting::format_streak(habit, habit.streak(now)))
    }

    /// Finds the habit with the highest current streak (first added wins ties).
    pub async fn handle_longest_streak(&self) -> McpResult<String> {
        let now = self.now();
        let data = self.lock_data();
        match data.longest_streak(now) {
            Some((habit, streak)) => Ok(format!(
                "Habit '{}' has the longest streak of {}.",
                habit.name, streak
            )),
            None => Ok("No habits found".to_string()),
        }
    }
}
