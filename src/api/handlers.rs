//! HTTP handlers for the task API.

use super::dto::{
    CreatedResponse, EmptyResponse, IdQuery, NextDateQuery, TaskListResponse, TaskRequest,
    TaskResponse,
};
use super::error::ApiError;
use crate::task::{
    domain::{TaskDate, TaskInput, next_date},
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use mockable::Clock;
use std::sync::Arc;

/// Shared handler dependencies.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task lifecycle service.
    pub service: Arc<TaskLifecycleService<R, C>>,
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state around a service.
    #[must_use]
    pub const fn new(service: Arc<TaskLifecycleService<R, C>>) -> Self {
        Self { service }
    }
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// `GET /api/nextdate`: computes the next occurrence as plain text.
///
/// # Errors
///
/// Returns `400 Bad Request` when `now` or `date` is not a `YYYYMMDD` date or
/// the rule cannot be applied.
pub async fn next_date_handler(Query(query): Query<NextDateQuery>) -> Result<String, ApiError> {
    let now = TaskDate::parse(&query.now)?;
    Ok(next_date(now.as_naive(), &query.date, &query.repeat)?)
}

/// `POST /api/task`: creates a task and returns its identifier.
///
/// # Errors
///
/// Returns `400 Bad Request` for a malformed body or invalid fields and
/// `500 Internal Server Error` on storage failure.
pub async fn create_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = payload?;
    let task = state.service.create(&TaskInput::from(request)).await?;
    Ok(Json(CreatedResponse {
        id: task.id().into_inner(),
    }))
}

/// `GET /api/task?id=`: returns a single task.
///
/// # Errors
///
/// Returns `400 Bad Request` without an identifier and `404 Not Found` for an
/// unknown one.
pub async fn get_task<R, C>(
    State(state): State<AppState<R, C>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<TaskResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let task = state.service.find_by_id(&query.id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `GET /api/tasks`: lists the upcoming tasks ordered by date.
///
/// # Errors
///
/// Returns `500 Internal Server Error` on storage failure.
pub async fn list_tasks<R, C>(
    State(state): State<AppState<R, C>>,
) -> Result<Json<TaskListResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let tasks = state.service.list().await?;
    Ok(Json(TaskListResponse {
        tasks: tasks.iter().map(TaskResponse::from).collect(),
    }))
}

/// `PUT /api/task`: replaces every field of a task.
///
/// # Errors
///
/// Returns `400 Bad Request` for invalid fields and `404 Not Found` for an
/// unknown identifier.
pub async fn edit_task<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<EmptyResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Json(request) = payload?;
    state.service.edit(&TaskInput::from(request)).await?;
    Ok(Json(EmptyResponse {}))
}

/// `POST /api/task/done?id=`: completes a task.
///
/// # Errors
///
/// Returns `404 Not Found` for an unknown identifier and `400 Bad Request`
/// when the next occurrence cannot be computed.
pub async fn mark_task_done<R, C>(
    State(state): State<AppState<R, C>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<EmptyResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    state.service.mark_done(&query.id).await?;
    Ok(Json(EmptyResponse {}))
}

/// `DELETE /api/task?id=`: removes a task.
///
/// # Errors
///
/// Returns `404 Not Found` for an unknown identifier.
pub async fn delete_task<R, C>(
    State(state): State<AppState<R, C>>,
    Query(query): Query<IdQuery>,
) -> Result<Json<EmptyResponse>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    state.service.delete(&query.id).await?;
    Ok(Json(EmptyResponse {}))
}
