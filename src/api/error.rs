//! Translation of service errors into HTTP responses.

use crate::task::{
    domain::{ParseTaskDateError, RecurrenceError},
    ports::TaskRepositoryError,
    services::TaskLifecycleError,
};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;
use thiserror::Error;

/// Failed API request: a status code and a message sent as
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    /// HTTP status of the response.
    pub status: StatusCode,
    /// Human-readable explanation.
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    /// Creates a `400 Bad Request` error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Creates a `404 Not Found` error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    /// Creates a `500 Internal Server Error`.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: &self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        if err.is_not_found() {
            return Self::not_found(err.to_string());
        }
        match err {
            TaskLifecycleError::Domain(domain) => Self::bad_request(domain.to_string()),
            TaskLifecycleError::Repository(TaskRepositoryError::Persistence(cause)) => {
                error!("event=api_request status=error error={cause}");
                Self::internal("storage failure")
            }
            TaskLifecycleError::Repository(other) => Self::internal(other.to_string()),
        }
    }
}

impl From<RecurrenceError> for ApiError {
    fn from(err: RecurrenceError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<ParseTaskDateError> for ApiError {
    fn from(err: ParseTaskDateError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(format!("invalid JSON body: {}", rejection.body_text()))
    }
}
