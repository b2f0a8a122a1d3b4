//! Habit domain models and streak logic
//!
//! - `record`: a single habit and its periodicity
//! - `streak`: the streak calculator (pure, no I/O)
//! - `habit_data`: the collection of habits with name-based lookup
//! - `queries`: filters and analytics over the collection

mod error;
mod habit_data;
mod queries;
mod record;
pub mod streak;

pub use error::HabitError;
pub use habit_data::{FORMAT_VERSION, HabitData};
pub use record::{Habit, Periodicity, local_now, normalize_name};
pub use streak::{PeriodKey, compute_streak, compute_streak_for};
