//! Time source for rush-hour checks.

use chrono::{Local, NaiveDateTime};

/// Supplies the local wall-clock time used when pricing an order
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
