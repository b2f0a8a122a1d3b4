//! List handlers for the habit MCP server

use crate::HabitServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl HabitServerHandler {
    /// Lists every habit in insertion order.
    pub async fn handle_list_habits(&self) -> McpResult<String> {
        let now = self.now();
        let data = self.lock_data();
        let habits: Vec<_> = data.habits().iter().collect();
        Ok(formatting::format_habits(&habits, now))
    }

    /// Lists habits matching a periodicity filter.
    pub async fn handle_habits_by_periodicity(&self, periodicity: String) -> McpResult<String> {
        let periodicity = validation::parse_periodicity(&periodicity)?;
        let now = self.now();
        let data = self.lock_data();
        let habits = data.by_periodicity(periodicity);
        Ok(formatting::format_habits(&habits, now))
    }
}
