//! Add habit handler for the habit MCP server

use crate::HabitServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::{info, warn};

impl HabitServerHandler {
    /// Validates the name and periodicity, rejects duplicates, then saves.
    ///
    /// The in-memory collection changes only once the save succeeds.
    pub async fn handle_add_habit(&self, name: String, periodicity: String) -> McpResult<String> {
        let name = validation::require_name(&name)?;
        let periodicity = validation::parse_periodicity(&periodicity)?;
        let now = self.now();

        let mut data = self.lock_data();
        let mut next = data.clone();
        next.create(name, periodicity, now)
            .map_err(validation::habit_error)?;

        if let Err(e) = self.save_data(&next) {
            warn!(habit = %name, error = %e, "save failed");
            bail_public!(_, "Failed to save: {}", e);
        }
        *data = next;
        drop(data);

        info!(habit = %name, %periodicity, "habit created");
        Ok(format!(
            "Habit '{}' created (periodicity: {})",
            name.trim(),
            periodicity
        ))
    }
}
