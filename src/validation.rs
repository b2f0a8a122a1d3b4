//! Validation helper functions for the habit MCP server
//!
//! Converts raw tool parameters into domain values, and domain errors into MCP
//! errors the client can show to the user.

use crate::habit::{HabitError, Periodicity};
use mcp_attr::Result as McpResult;

/// Parse and validate a periodicity parameter
///
/// # Arguments
/// * `periodicity_str` - "daily", "weekly" or "monthly" (case and surrounding whitespace ignored)
///
/// # Returns
/// Result containing the parsed Periodicity or an INVALID_PARAMS error
pub fn parse_periodicity(periodicity_str: &str) -> McpResult<Periodicity> {
    periodicity_str
        .parse::<Periodicity>()
        .map_err(|e| invalid_params(e.to_string()))
}

/// Validate a habit name parameter
///
/// Returns the name as given; trimming happens only when names are compared.
pub fn require_name(name: &str) -> McpResult<&str> {
    if name.trim().is_empty() {
        return Err(invalid_params(HabitError::EmptyName.to_string()));
    }
    Ok(name)
}

/// Map a domain error onto a user-visible INVALID_PARAMS error
pub fn habit_error(error: HabitError) -> mcp_attr::Error {
    invalid_params(error.to_string())
}

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}
