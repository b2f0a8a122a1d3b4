//! Source of "now" for the server
//!
//! The streak calculator takes `now` as a parameter; the server reads it from a
//! `Clock` so tests can pin the date.

use chrono::NaiveDateTime;

use crate::habit::local_now;

/// Provides the current local wall-clock time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        local_now()
    }
}

/// Always returns the same moment
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
