//! Service layer for task creation, editing, completion and removal.

use crate::task::{
    domain::{
        MarkDoneOutcome, Task, TaskDomainError, TaskId, TaskInput, prepare_for_create,
        prepare_for_edit, prepare_for_mark_done,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use log::{info, warn};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Largest number of tasks returned by a listing.
pub const MAX_TASKS_LIMIT: usize = 50;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns whether the error means the addressed task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Domain(TaskDomainError::NotFound(_))
                | Self::Repository(TaskRepositoryError::NotFound(_))
        )
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// "Today" is always read from the injected clock, so a fixed clock makes
/// every operation reproducible.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the current calendar date according to the service clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when validation or date
    /// advancement fails, or [`TaskLifecycleError::Repository`] when the store
    /// rejects the write.
    pub async fn create(&self, input: &TaskInput) -> TaskLifecycleResult<Task> {
        let new_task = prepare_for_create(input, self.today())
            .inspect_err(|err| log_rejected("task_create", err))?;
        let id = self.repository.store(&new_task).await?;
        let task = Task::from_new(id, new_task);
        info!(
            "event=task_create status=ok id={} date={} repeat='{}'",
            task.id(),
            task.date(),
            task.repeat_str()
        );
        Ok(task)
    }

    /// Retrieves a task by its client-supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns a not-found error (see [`TaskLifecycleError::is_not_found`])
    /// when no such task exists, [`TaskDomainError::MissingId`] for an empty
    /// identifier, or [`TaskLifecycleError::Repository`] on lookup failure.
    pub async fn find_by_id(&self, raw_id: &str) -> TaskLifecycleResult<Task> {
        let id = TaskId::parse(raw_id)?;
        self.load(id).await
    }

    /// Lists up to [`MAX_TASKS_LIMIT`] tasks ordered by due date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(MAX_TASKS_LIMIT).await?)
    }

    /// Replaces every field of an existing task.
    ///
    /// Nothing is written unless every field is valid.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for a missing or unknown
    /// identifier and invalid fields, or [`TaskLifecycleError::Repository`]
    /// when the task vanished before the write or the write failed.
    pub async fn edit(&self, input: &TaskInput) -> TaskLifecycleResult<Task> {
        let id = TaskId::parse(&input.id).inspect_err(|err| log_rejected("task_edit", err))?;
        let existing = self.repository.find_by_id(id).await?;
        let task = prepare_for_edit(input, existing.as_ref())
            .inspect_err(|err| log_rejected("task_edit", err))?;
        self.repository.update(&task).await?;
        info!(
            "event=task_edit status=ok id={} date={} repeat='{}'",
            task.id(),
            task.date(),
            task.repeat_str()
        );
        Ok(task)
    }

    /// Completes a task: one-off tasks are deleted, recurring tasks move to
    /// their next occurrence after today.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist,
    /// [`TaskLifecycleError::Domain`] when the next occurrence cannot be
    /// computed (the task is left untouched), or
    /// [`TaskLifecycleError::Repository`] when the write fails.
    pub async fn mark_done(&self, raw_id: &str) -> TaskLifecycleResult<MarkDoneOutcome> {
        let id = TaskId::parse(raw_id)?;
        let task = self.load(id).await?;
        let outcome = prepare_for_mark_done(&task, self.today())
            .inspect_err(|err| log_rejected("task_done", err))?;

        match outcome {
            MarkDoneOutcome::Delete => {
                self.repository.delete(id).await?;
                info!("event=task_done status=ok id={id} action=delete");
            }
            MarkDoneOutcome::SetDate(next) => {
                // Only the date is written so edits made since the load survive.
                self.repository.reschedule(id, next).await?;
                info!("event=task_done status=ok id={id} action=reschedule date={next}");
            }
        }
        Ok(outcome)
    }

    /// Deletes a task unconditionally.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no task matched, or
    /// [`TaskLifecycleError::Repository`] when the write fails.
    pub async fn delete(&self, raw_id: &str) -> TaskLifecycleResult<()> {
        let id = TaskId::parse(raw_id)?;
        self.repository.delete(id).await?;
        info!("event=task_delete status=ok id={id}");
        Ok(())
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }
}

fn log_rejected(event: &str, err: &TaskDomainError) {
    warn!("event={event} status=rejected error={err}");
}
