//! Shared helpers for task unit tests.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use mockable::Clock;
use std::sync::RwLock;

/// Parses a `YYYYMMDD` literal.
pub fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y%m%d").expect("test date literal should be valid")
}

/// Clock pinned to noon of a settable calendar day.
#[derive(Debug)]
pub struct TestClock {
    now: RwLock<NaiveDateTime>,
}

impl TestClock {
    /// Creates a clock showing noon of `date`.
    pub fn on(date: &str) -> Self {
        Self {
            now: RwLock::new(noon(date)),
        }
    }

    /// Moves the clock to noon of `date`.
    pub fn set(&self, date: &str) {
        *self.now.write().expect("clock lock") = noon(date);
    }

    fn current(&self) -> NaiveDateTime {
        *self.now.read().expect("clock lock")
    }
}

fn noon(date: &str) -> NaiveDateTime {
    day(date)
        .and_hms_opt(12, 0, 0)
        .expect("noon should be a valid time")
}

impl Clock for TestClock {
    fn local(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.current())
            .earliest()
            .expect("noon should exist in the local time zone")
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.current())
    }
}
