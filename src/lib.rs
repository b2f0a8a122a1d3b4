//! Habit MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for tracking personal
//! habits and their completion streaks. Habits recur daily, weekly or monthly, and a
//! streak counts the consecutive periods, up to and including the current one, in
//! which a habit was completed.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `HabitServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `habit` module - Habit model, collection and streak calculator
//! - **Persistence Layer**: `storage` module - `HabitStore` trait with a file-backed implementation
//!
//! # Example
//!
//! ```no_run
//! use habit_mcp::HabitServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = HabitServerHandler::new("habits.toml")?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod formatting;
mod handlers;
pub mod habit;
pub mod storage;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDateTime;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use habit::{Habit, HabitData, HabitError, Periodicity, compute_streak};
pub use storage::{FileStorage, HabitStore};

/// MCP Server handler for habit tracking
///
/// Holds the habit collection in memory and writes it back through the
/// configured `HabitStore` after every change.
pub struct HabitServerHandler {
    pub(crate) data: Mutex<HabitData>,
    pub(crate) storage: Box<dyn HabitStore>,
    pub(crate) clock: Box<dyn Clock>,
}

impl HabitServerHandler {
    /// Create a new habit server handler backed by a file
    ///
    /// # Arguments
    /// * `storage_path` - Path to the habit data file (`.json` selects the legacy JSON layout, anything else TOML)
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use habit_mcp::HabitServerHandler;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = HabitServerHandler::new("habits.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str) -> Result<Self> {
        Self::with_store(Box::new(FileStorage::new(storage_path)), Box::new(SystemClock))
    }

    /// Create a handler from an arbitrary store and clock
    pub fn with_store(storage: Box<dyn HabitStore>, clock: Box<dyn Clock>) -> Result<Self> {
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            clock,
        })
    }

    /// Lock the habit collection, recovering the guard if a holder panicked
    pub(crate) fn lock_data(&self) -> MutexGuard<'_, HabitData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current moment from the configured clock
    pub(crate) fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Persist the given snapshot of the habit collection
    pub(crate) fn save_data(&self, data: &HabitData) -> Result<()> {
        self.storage.save(data)
    }
}

/// Habit tracker: build routines by completing habits every day, week or month.
///
/// Each habit has a name and a periodicity (daily, weekly, monthly). Completing a habit
/// records the current time. The streak of a habit is the number of consecutive periods,
/// ending with the current one, in which it was completed at least once; missing the
/// current period (e.g. not yet done today) means the streak is 0.
///
/// Habit names are matched case-insensitively, ignoring surrounding whitespace.
#[mcp_server]
impl McpServer for HabitServerHandler {
    /// **Create**: Start tracking a new habit with no completions.
    /// **Periodicity**: daily, weekly (ISO weeks, Monday to Sunday) or monthly.
    /// **Note**: Names must be unique, ignoring case and surrounding whitespace.
    #[tool]
    async fn add_habit(
        &self,
        /// Name of the habit (e.g., "Read", "Morning run")
        name: String,
        /// Periodicity: daily/weekly/monthly
        periodicity: String,
    ) -> McpResult<String> {
        self.handle_add_habit(name, periodicity).await
    }

    /// **Review**: List all habits with periodicity, completion count and current streak.
    #[tool]
    async fn list_habits(&self) -> McpResult<String> {
        self.handle_list_habits().await
    }

    /// **Check off**: Mark a habit as completed now.
    /// **Tip**: Completing twice in the same period does not extend the streak.
    #[tool]
    async fn complete_habit(
        &self,
        /// Name of the habit to complete
        name: String,
    ) -> McpResult<String> {
        self.handle_complete_habit(name).await
    }

    /// **Streak**: Show how many consecutive periods a habit has been completed, up to now.
    #[tool]
    async fn get_streak(
        &self,
        /// Name of the habit
        name: String,
    ) -> McpResult<String> {
        self.handle_get_streak(name).await
    }

    /// **Filter**: List habits with the given periodicity.
    #[tool]
    async fn habits_by_periodicity(
        &self,
        /// Periodicity: daily/weekly/monthly
        periodicity: String,
    ) -> McpResult<String> {
        self.handle_habits_by_periodicity(periodicity).await
    }

    /// **Analyze**: Show the habit with the longest current streak.
    #[tool]
    async fn longest_streak(&self) -> McpResult<String> {
        self.handle_longest_streak().await
    }
}
