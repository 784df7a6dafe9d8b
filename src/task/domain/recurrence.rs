//! Recurrence rules and the next-occurrence engine.
//!
//! Two rule grammars are recognised: `d N` repeats every `N` days
//! (`1 <= N <= 400`) and `y` repeats every calendar year. An empty rule marks
//! a one-off task and is never advanced.
//!
//! Advancement always moves at least one step forward from the start date and
//! stops at the first occurrence strictly after the reference date. Both rules
//! are computed in closed form, so large gaps between the start date and the
//! reference date cost nothing extra.
//!
//! A February 29 start date advanced by the yearly rule lands on February 28
//! in years without a leap day.

use super::{RecurrenceError, TaskDate};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const DAY_RULE_PREFIX: &str = "d ";
const YEARLY_RULE: &str = "y";

/// Validated day count of a `d N` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayInterval(u16);

impl DayInterval {
    /// Smallest accepted interval.
    pub const MIN: u16 = 1;
    /// Largest accepted interval.
    pub const MAX: u16 = 400;

    /// Creates an interval, returning `None` outside `[MIN, MAX]`.
    #[must_use]
    pub const fn new(days: u16) -> Option<Self> {
        if days < Self::MIN || days > Self::MAX {
            return None;
        }
        Some(Self(days))
    }

    /// Returns the number of days per step.
    #[must_use]
    pub const fn days(self) -> u16 {
        self.0
    }
}

/// A parsed, non-empty recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecurrenceRule {
    /// Repeat every fixed number of days (`d N`).
    EveryDays(DayInterval),
    /// Repeat on the same month and day every year (`y`).
    Yearly,
}

impl RecurrenceRule {
    /// Parses a non-empty rule string.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::MissingRule`] for an empty string,
    /// [`RecurrenceError::InvalidInterval`] for a `d ` rule whose count is not
    /// a canonical integer in `[1, 400]`, and
    /// [`RecurrenceError::UnsupportedRule`] for anything else.
    pub fn parse(rule: &str) -> Result<Self, RecurrenceError> {
        if rule.is_empty() {
            return Err(RecurrenceError::MissingRule);
        }
        if rule == YEARLY_RULE {
            return Ok(Self::Yearly);
        }
        let Some(count) = rule.strip_prefix(DAY_RULE_PREFIX) else {
            return Err(RecurrenceError::UnsupportedRule(rule.to_owned()));
        };
        parse_day_count(count)
            .map(Self::EveryDays)
            .ok_or_else(|| RecurrenceError::InvalidInterval(rule.to_owned()))
    }

    /// Parses a task's `repeat` field, where an empty string means one-off.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`RecurrenceRule::parse`] for non-empty
    /// input.
    pub fn parse_optional(rule: &str) -> Result<Option<Self>, RecurrenceError> {
        if rule.is_empty() {
            return Ok(None);
        }
        Self::parse(rule).map(Some)
    }

    /// Returns the earliest occurrence strictly after `now`, at least one
    /// step after `start`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::DateOutOfRange`] when the occurrence falls
    /// after year 9999.
    pub fn next_after(self, start: TaskDate, now: NaiveDate) -> Result<TaskDate, RecurrenceError> {
        let next = match self {
            Self::EveryDays(interval) => next_by_days(start.as_naive(), now, interval),
            Self::Yearly => next_by_years(start.as_naive(), now),
        };
        next.and_then(TaskDate::from_naive)
            .ok_or(RecurrenceError::DateOutOfRange)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EveryDays(interval) => write!(f, "{DAY_RULE_PREFIX}{}", interval.days()),
            Self::Yearly => f.write_str(YEARLY_RULE),
        }
    }
}

impl TryFrom<String> for RecurrenceRule {
    type Error = RecurrenceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecurrenceRule> for String {
    fn from(value: RecurrenceRule) -> Self {
        value.to_string()
    }
}

/// Computes the next occurrence of a stored date.
///
/// `now` is the reference date, `start` the stored `YYYYMMDD` date and `rule`
/// the raw recurrence rule.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] for a malformed start date,
/// [`RecurrenceError::PastDateNoRule`] when the start date is before `now`
/// and the rule is empty, [`RecurrenceError::MissingRule`] for any other
/// empty rule, and the parse or range errors of [`RecurrenceRule`].
pub fn next_date(now: NaiveDate, start: &str, rule: &str) -> Result<String, RecurrenceError> {
    let start_date = TaskDate::parse(start)?;
    if rule.is_empty() && start_date.as_naive() < now {
        return Err(RecurrenceError::PastDateNoRule);
    }
    let parsed_rule = RecurrenceRule::parse(rule)?;
    parsed_rule
        .next_after(start_date, now)
        .map(|next| next.to_string())
}

/// Accepts digits only, without sign or leading zero.
fn parse_day_count(count: &str) -> Option<DayInterval> {
    let is_canonical = !count.is_empty()
        && !count.starts_with('0')
        && count.bytes().all(|b| b.is_ascii_digit());
    if !is_canonical {
        return None;
    }
    count.parse::<u16>().ok().and_then(DayInterval::new)
}

fn next_by_days(start: NaiveDate, now: NaiveDate, interval: DayInterval) -> Option<NaiveDate> {
    let step = i64::from(interval.days());
    let elapsed = now.signed_duration_since(start).num_days().max(0);
    let steps = elapsed.div_euclid(step).checked_add(1)?;
    let offset = u64::try_from(steps.checked_mul(step)?).ok()?;
    start.checked_add_days(Days::new(offset))
}

fn next_by_years(start: NaiveDate, now: NaiveDate) -> Option<NaiveDate> {
    let first_year = start.year().checked_add(1)?.max(now.year());
    let candidate = anniversary(start, first_year)?;
    if candidate > now {
        return Some(candidate);
    }
    anniversary(start, first_year.checked_add(1)?)
}

/// Same month and day in `year`; February 29 falls back to February 28.
fn anniversary(start: NaiveDate, year: i32) -> Option<NaiveDate> {
    start
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}
