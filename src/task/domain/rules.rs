//! Lifecycle rules for a task's date and recurrence fields.
//!
//! These functions are pure: the caller supplies "today" and any stored task
//! they need, and persists whatever comes back.

use super::{
    NewTask, PersistedTaskData, RecurrenceError, RecurrenceRule, Task, TaskDate, TaskDomainError,
    TaskId, Title,
};
use chrono::NaiveDate;

/// Raw task fields as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    /// Task identifier; only meaningful for edits.
    pub id: String,
    /// Due date in `YYYYMMDD` form, empty for "today" on create.
    pub date: String,
    /// Task title.
    pub title: String,
    /// Free-text comment.
    pub comment: String,
    /// Recurrence rule, empty for a one-off task.
    pub repeat: String,
}

impl TaskInput {
    /// Creates input with a title and every other field empty.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the task identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Sets the comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Sets the recurrence rule.
    #[must_use]
    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = repeat.into();
        self
    }
}

/// What completing a task does to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkDoneOutcome {
    /// The task is one-off and is removed.
    Delete,
    /// The task recurs and becomes due on the given date.
    SetDate(TaskDate),
}

/// Validates a new task and resolves its initial due date.
///
/// An empty date means today. A one-off task dated in the past is moved to
/// today; a recurring one is advanced to its first occurrence after today.
/// Dates on or after today are kept as given, recurring or not.
///
/// # Errors
///
/// Returns [`TaskDomainError::MissingTitle`], [`TaskDomainError::InvalidDate`]
/// or [`TaskDomainError::Recurrence`] for an invalid rule or a failed
/// advancement.
pub fn prepare_for_create(input: &TaskInput, today: NaiveDate) -> Result<NewTask, TaskDomainError> {
    let title = Title::new(input.title.as_str())?;
    let today_date = TaskDate::from_naive(today).ok_or(RecurrenceError::DateOutOfRange)?;
    let requested = if input.date.is_empty() {
        today_date
    } else {
        TaskDate::parse(&input.date)?
    };
    let repeat = RecurrenceRule::parse_optional(&input.repeat)?;
    let date = resolve_create_date(requested, today_date, repeat)?;
    Ok(NewTask::new(date, title, input.comment.as_str(), repeat))
}

/// Validates a full replacement of a stored task.
///
/// `existing` is the stored task looked up by the caller for `input.id`.
/// Fields are stored as given once valid; the date is never advanced or
/// corrected here.
///
/// # Errors
///
/// Returns [`TaskDomainError::MissingId`] for an empty identifier,
/// [`TaskDomainError::NotFound`] when no matching task exists, and the field
/// validation errors of [`prepare_for_create`] otherwise.
pub fn prepare_for_edit(input: &TaskInput, existing: Option<&Task>) -> Result<Task, TaskDomainError> {
    let id = TaskId::parse(&input.id)?;
    let current = existing
        .filter(|task| task.id() == id)
        .ok_or_else(|| TaskDomainError::NotFound(input.id.clone()))?;
    let title = Title::new(input.title.as_str())?;
    let date = TaskDate::parse(&input.date)?;
    let repeat = RecurrenceRule::parse_optional(&input.repeat)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: current.id(),
        date,
        title,
        comment: input.comment.clone(),
        repeat,
    }))
}

/// Decides what completing `task` on `now` does.
///
/// # Errors
///
/// Returns [`TaskDomainError::Recurrence`] when the next occurrence cannot be
/// computed; the task must then be left unchanged.
pub fn prepare_for_mark_done(
    task: &Task,
    now: NaiveDate,
) -> Result<MarkDoneOutcome, TaskDomainError> {
    let Some(rule) = task.repeat() else {
        return Ok(MarkDoneOutcome::Delete);
    };
    let next = rule.next_after(task.date(), now)?;
    Ok(MarkDoneOutcome::SetDate(next))
}

fn resolve_create_date(
    requested: TaskDate,
    today: TaskDate,
    repeat: Option<RecurrenceRule>,
) -> Result<TaskDate, TaskDomainError> {
    if requested >= today {
        return Ok(requested);
    }
    match repeat {
        None => Ok(today),
        Some(rule) => Ok(rule.next_after(requested, today.as_naive())?),
    }
}
