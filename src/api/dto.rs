//! Request and response bodies of the task API.

use crate::task::domain::{Task, TaskInput};
use serde::{Deserialize, Serialize};

/// Task fields sent by a client when creating or editing a task.
///
/// Missing and `null` fields are both treated as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskRequest {
    /// Task identifier, required for edits.
    pub id: Option<String>,
    /// Due date as `YYYYMMDD`.
    pub date: Option<String>,
    /// Task title.
    pub title: Option<String>,
    /// Free-text comment.
    pub comment: Option<String>,
    /// Recurrence rule.
    pub repeat: Option<String>,
}

impl From<TaskRequest> for TaskInput {
    fn from(request: TaskRequest) -> Self {
        Self {
            id: request.id.unwrap_or_default(),
            date: request.date.unwrap_or_default(),
            title: request.title.unwrap_or_default(),
            comment: request.comment.unwrap_or_default(),
            repeat: request.repeat.unwrap_or_default(),
        }
    }
}

/// Task as returned to clients; the identifier is rendered as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: String,
    /// Due date as `YYYYMMDD`.
    pub date: String,
    /// Task title.
    pub title: String,
    /// Free-text comment.
    pub comment: String,
    /// Recurrence rule, empty for one-off tasks.
    pub repeat: String,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            date: task.date().to_string(),
            title: task.title().as_str().to_owned(),
            comment: task.comment().to_owned(),
            repeat: task.repeat_str(),
        }
    }
}

/// Body returned after a task is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Identifier assigned to the new task.
    pub id: i64,
}

/// Body returned by the task listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListResponse {
    /// Tasks ordered by due date.
    pub tasks: Vec<TaskResponse>,
}

/// Empty JSON object returned by operations without a payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// Query string carrying a task identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IdQuery {
    /// Task identifier.
    pub id: String,
}

/// Query string of the next-date calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NextDateQuery {
    /// Reference date as `YYYYMMDD`.
    pub now: String,
    /// Start date as `YYYYMMDD`.
    pub date: String,
    /// Recurrence rule.
    pub repeat: String,
}
