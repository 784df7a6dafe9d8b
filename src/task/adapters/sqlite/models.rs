//! Diesel row models for task persistence.

use super::schema::scheduler;
use crate::task::domain::{NewTask, Task};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = scheduler)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Storage-assigned task identifier.
    pub id: i64,
    /// Due date as `YYYYMMDD`.
    pub date: String,
    /// Task title.
    pub title: String,
    /// Free-text comment, `None` when the column is NULL.
    pub comment: Option<String>,
    /// Recurrence rule, `None` or empty for one-off tasks.
    pub repeat: Option<String>,
}

/// Writable task columns, used for both inserts and full updates.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = scheduler)]
pub struct TaskFields {
    /// Due date as `YYYYMMDD`.
    pub date: String,
    /// Task title.
    pub title: String,
    /// Free-text comment.
    pub comment: String,
    /// Recurrence rule, empty for one-off tasks.
    pub repeat: String,
}

impl TaskFields {
    /// Builds the column values of a task awaiting its identifier.
    #[must_use]
    pub fn from_new(task: &NewTask) -> Self {
        Self {
            date: task.date().to_string(),
            title: task.title().as_str().to_owned(),
            comment: task.comment().to_owned(),
            repeat: task.repeat().map(|rule| rule.to_string()).unwrap_or_default(),
        }
    }

    /// Builds the column values of a stored task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            date: task.date().to_string(),
            title: task.title().as_str().to_owned(),
            comment: task.comment().to_owned(),
            repeat: task.repeat_str(),
        }
    }
}
