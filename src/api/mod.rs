//! JSON-over-HTTP boundary for the task scheduler.
//!
//! # Endpoints
//!
//! - `GET /api/nextdate?now=&date=&repeat=` - next occurrence as plain text
//! - `POST /api/task` - create a task, returns `{"id": <number>}`
//! - `GET /api/task?id=` - fetch a task
//! - `PUT /api/task` - replace a task
//! - `DELETE /api/task?id=` - delete a task
//! - `GET /api/tasks` - list upcoming tasks, returns `{"tasks": [...]}`
//! - `POST /api/task/done?id=` - complete a task
//!
//! Failures are returned as `{"error": "<message>"}` with a 4xx or 5xx status.

pub mod dto;
pub mod error;
pub mod handlers;


use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::{
    AppState, create_task, delete_task, edit_task, get_task, list_tasks, mark_task_done,
    next_date_handler,
};
use mockable::Clock;
use std::sync::Arc;

/// Builds the API router around a lifecycle service.
pub fn router<R, C>(service: Arc<TaskLifecycleService<R, C>>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/api/nextdate", get(next_date_handler))
        .route(
            "/api/task",
            get(get_task::<R, C>)
                .post(create_task::<R, C>)
                .put(edit_task::<R, C>)
                .delete(delete_task::<R, C>),
        )
        .route("/api/tasks", get(list_tasks::<R, C>))
        .route("/api/task/done", post(mark_task_done::<R, C>))
        .with_state(AppState::new(service))
}
