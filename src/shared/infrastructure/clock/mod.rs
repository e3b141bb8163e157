// Port for reading the current time.
//
// - now(): local wall-clock time, compared against appointment dates.
// - timestamp_millis(): epoch milliseconds, used to mint appointment ids.

use chrono::{Local, NaiveDateTime, Utc};

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn timestamp_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given wall-clock time. The timestamp is derived by reading
/// that time as UTC.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn timestamp_millis(&self) -> i64 {
        self.now.and_utc().timestamp_millis()
    }
}
