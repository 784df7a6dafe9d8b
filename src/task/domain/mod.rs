//! Domain model for scheduled tasks.
//!
//! The domain owns the `YYYYMMDD` date format, the recurrence grammar and the
//! engine that advances dates, and the lifecycle rules applied on create,
//! edit and completion. Nothing here reads a clock or touches storage.

mod date;
mod error;
mod ids;
mod recurrence;
mod rules;
mod task;

pub use date::{DATE_FORMAT, TaskDate};
pub use error::{ParseTaskDateError, RecurrenceError, TaskDomainError};
pub use ids::{TaskId, Title};
pub use recurrence::{DayInterval, RecurrenceRule, next_date};
pub use rules::{
    MarkDoneOutcome, TaskInput, prepare_for_create, prepare_for_edit, prepare_for_mark_done,
};
pub use task::{NewTask, PersistedTaskData, Task};
