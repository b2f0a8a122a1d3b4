//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use habit_mcp::{FileStorage, FixedClock, HabitServerHandler};
use tempfile::TempDir;

/// Build a timestamp at midnight of the given date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Build a timestamp at the given date and time
pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Create a test handler with temporary storage and a pinned clock
///
/// The TempDir must be kept alive for as long as the handler is used.
pub fn get_test_handler(file_name: &str, now: NaiveDateTime) -> (HabitServerHandler, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = reopen_handler(&temp_dir, file_name, now);
    (handler, temp_dir)
}

/// Open a fresh handler over an existing temporary directory
pub fn reopen_handler(temp_dir: &TempDir, file_name: &str, now: NaiveDateTime) -> HabitServerHandler {
    let storage = FileStorage::new(temp_dir.path().join(file_name));
    HabitServerHandler::with_store(Box::new(storage), Box::new(FixedClock(now))).unwrap()
}
