//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    MAX_TASKS_LIMIT, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
