//! `SQLite` repository implementation for task storage.

use super::{
    models::{TaskFields, TaskRow},
    pool::TaskSqlitePool,
    schema::scheduler,
};
use crate::task::{
    domain::{NewTask, PersistedTaskData, RecurrenceRule, Task, TaskDate, TaskId, Title},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// `SQLite`-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn store(&self, task: &NewTask) -> TaskRepositoryResult<TaskId> {
        let new_row = TaskFields::from_new(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(scheduler::table)
                .values(&new_row)
                .returning(scheduler::id)
                .get_result::<i64>(connection)
                .map(TaskId::from_i64)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let changes = TaskFields::from_task(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(scheduler::table.find(task_id.into_inner()))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn reschedule(&self, id: TaskId, date: TaskDate) -> TaskRepositoryResult<()> {
        let rendered = date.to_string();
        self.run_blocking(move |connection| {
            let affected = diesel::update(scheduler::table.find(id.into_inner()))
                .set(scheduler::date.eq(rendered))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = scheduler::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, limit: usize) -> TaskRepositoryResult<Vec<Task>> {
        let row_limit = i64::try_from(limit).map_err(TaskRepositoryError::persistence)?;
        self.run_blocking(move |connection| {
            let rows = scheduler::table
                .order((scheduler::date.asc(), scheduler::id.asc()))
                .limit(row_limit)
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(scheduler::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        date: persisted_date,
        title: persisted_title,
        comment,
        repeat: persisted_repeat,
    } = row;

    let date = TaskDate::parse(&persisted_date).map_err(TaskRepositoryError::persistence)?;
    let title = Title::new(persisted_title).map_err(TaskRepositoryError::persistence)?;
    // Rows written by older schemas may hold NULL in the optional columns.
    let persisted_repeat = persisted_repeat.unwrap_or_default();
    let repeat = RecurrenceRule::parse_optional(&persisted_repeat)
        .map_err(TaskRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_i64(id),
        date,
        title,
        comment: comment.unwrap_or_default(),
        repeat,
    }))
}
