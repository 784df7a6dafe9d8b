//! Then steps for task scheduling BDD scenarios.

use super::world::{SchedulingWorld, run_async};
use rstest_bdd_macros::then;
use todo_scheduler::task::services::TaskLifecycleError;

#[then(r#"the task is scheduled for "{date}""#)]
fn task_is_scheduled_for(world: &SchedulingWorld, date: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let stored = run_async(world.service.find_by_id(&task.id().to_string()))?;

    if stored.date().to_string() != date {
        return Err(eyre::eyre!("expected date {date}, found {}", stored.date()));
    }
    Ok(())
}

#[then("the task no longer exists")]
fn task_no_longer_exists(world: &SchedulingWorld) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let lookup = run_async(world.service.find_by_id(&task.id().to_string()));

    match lookup {
        Err(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected task to be gone, got {other:?}")),
    }
}

#[then("the request is rejected as invalid")]
fn request_rejected_as_invalid(world: &SchedulingWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(TaskLifecycleError::Domain(_)) if world.current_task.is_none() => Ok(()),
        other => Err(eyre::eyre!("expected a validation error, got {other:?}")),
    }
}

#[then("the request fails because the task was not found")]
fn request_fails_not_found(world: &SchedulingWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(err) if err.is_not_found() => Ok(()),
        other => Err(eyre::eyre!("expected a not-found error, got {other:?}")),
    }
}
