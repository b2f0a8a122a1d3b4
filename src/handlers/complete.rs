//! Complete habit handler for the habit MCP server

use crate::HabitServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::{info, warn};

impl HabitServerHandler {
    /// Appends the current moment to the habit's completions and saves.
    ///
    /// The in-memory collection changes only once the save succeeds.
    pub async fn handle_complete_habit(&self, name: String) -> McpResult<String> {
        let now = self.now();

        let mut data = self.lock_data();
        let mut next = data.clone();
        let habit = next.complete(&name, now).map_err(validation::habit_error)?;
        let habit_name = habit.name.clone();
        let streak = habit.streak(now);

        if let Err(e) = self.save_data(&next) {
            warn!(habit = %habit_name, error = %e, "save failed");
            bail_public!(_, "Failed to save: {}", e);
        }
        *data = next;
        drop(data);

        info!(habit = %habit_name, streak, "habit completed");
        Ok(format!(
            "Habit '{}' marked as completed. Current streak: {}",
            habit_name, streak
        ))
    }
}
