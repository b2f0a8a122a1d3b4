use thiserror::Error;

/// Errors raised by habit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HabitError {
    #[error("Habit name must not be empty")]
    EmptyName,

    #[error("Habit '{0}' already exists")]
    DuplicateName(String),

    #[error("Habit '{0}' not found")]
    NotFound(String),

    #[error("Unsupported periodicity '{0}'. Valid options are: daily, weekly, monthly")]
    UnsupportedPeriodicity(String),
}
