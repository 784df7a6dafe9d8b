//! Calendar dates in their persisted `YYYYMMDD` form.

use super::ParseTaskDateError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `chrono` format string for persisted task dates.
pub const DATE_FORMAT: &str = "%Y%m%d";

const DATE_LEN: usize = 8;
const MAX_YEAR: i32 = 9999;

/// Calendar date of a task, always representable as exactly 8 ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDate(NaiveDate);

impl TaskDate {
    /// Parses a `YYYYMMDD` string.
    ///
    /// Separators, signs and any length other than 8 are rejected, as are
    /// impossible dates such as `20230229`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTaskDateError`] when the value is not a valid date.
    pub fn parse(value: &str) -> Result<Self, ParseTaskDateError> {
        let is_well_formed = value.len() == DATE_LEN && value.bytes().all(|b| b.is_ascii_digit());
        if !is_well_formed {
            return Err(ParseTaskDateError(value.to_owned()));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParseTaskDateError(value.to_owned()))
    }

    /// Wraps a calendar date, returning `None` when its year needs more or
    /// fewer than four digits.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        (0..=MAX_YEAR).contains(&date.year()).then_some(Self(date))
    }

    /// Returns the underlying calendar date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl TryFrom<String> for TaskDate {
    type Error = ParseTaskDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TaskDate> for String {
    fn from(value: TaskDate) -> Self {
        value.to_string()
    }
}
