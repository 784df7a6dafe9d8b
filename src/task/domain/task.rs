//! Task aggregate root and its unpersisted counterpart.

use super::{RecurrenceRule, TaskDate, TaskId, Title};
use serde::{Deserialize, Serialize};

/// A validated task that has not been assigned a storage identifier yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    date: TaskDate,
    title: Title,
    comment: String,
    repeat: Option<RecurrenceRule>,
}

impl NewTask {
    /// Creates an unpersisted task from validated fields.
    #[must_use]
    pub fn new(
        date: TaskDate,
        title: Title,
        comment: impl Into<String>,
        repeat: Option<RecurrenceRule>,
    ) -> Self {
        Self {
            date,
            title,
            comment: comment.into(),
            repeat,
        }
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> TaskDate {
        self.date
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the comment, empty when none was given.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the recurrence rule, `None` for a one-off task.
    #[must_use]
    pub const fn repeat(&self) -> Option<RecurrenceRule> {
        self.repeat
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    date: TaskDate,
    title: Title,
    comment: String,
    repeat: Option<RecurrenceRule>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted due date.
    pub date: TaskDate,
    /// Persisted title.
    pub title: Title,
    /// Persisted comment.
    pub comment: String,
    /// Persisted recurrence rule.
    pub repeat: Option<RecurrenceRule>,
}

impl Task {
    /// Attaches a storage identifier to a new task.
    #[must_use]
    pub fn from_new(id: TaskId, task: NewTask) -> Self {
        Self {
            id,
            date: task.date,
            title: task.title,
            comment: task.comment,
            repeat: task.repeat,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            date: data.date,
            title: data.title,
            comment: data.comment,
            repeat: data.repeat,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> TaskDate {
        self.date
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the comment, empty when none was given.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the recurrence rule, `None` for a one-off task.
    #[must_use]
    pub const fn repeat(&self) -> Option<RecurrenceRule> {
        self.repeat
    }

    /// Returns the recurrence rule in its persisted form, empty for a one-off
    /// task.
    #[must_use]
    pub fn repeat_str(&self) -> String {
        self.repeat.map(|rule| rule.to_string()).unwrap_or_default()
    }

    /// Returns whether the task is removed rather than rescheduled when done.
    #[must_use]
    pub const fn is_one_off(&self) -> bool {
        self.repeat.is_none()
    }

    /// Moves the task to a new due date.
    pub const fn reschedule(&mut self, date: TaskDate) {
        self.date = date;
    }
}
