//! Repository contract tests against a real `scheduler` table.

use super::helpers::{TestDatabase, database};
use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use rstest::rstest;
use todo_scheduler::task::{
    adapters::sqlite::{SqliteTaskRepository, open_pool},
    domain::{NewTask, RecurrenceRule, Task, TaskDate, TaskId, Title},
    ports::{TaskRepository, TaskRepositoryError},
};

fn new_task(date: &str, title: &str, repeat: &str) -> Result<NewTask, eyre::Report> {
    Ok(NewTask::new(
        TaskDate::parse(date)?,
        Title::new(title)?,
        format!("comment for {title}"),
        RecurrenceRule::parse_optional(repeat)?,
    ))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_task_reads_back_with_every_field(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let repository = db.repository();
    let task = new_task("20240615", "Pay rent", "d 30")?;

    let id = repository.store(&task).await?;
    let found = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("stored task missing"))?;

    eyre::ensure!(found == Task::from_new(id, task), "round trip mismatch");
    eyre::ensure!(found.repeat_str() == "d 30", "repeat text should persist");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_never_reused(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let repository = db.repository();
    let first = repository.store(&new_task("20240615", "One", "")?).await?;
    repository.delete(first).await?;

    let second = repository.store(&new_task("20240615", "Two", "")?).await?;

    eyre::ensure!(
        second.into_inner() > first.into_inner(),
        "id {second} should follow {first}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_date_then_id_and_limits(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let repository = db.repository();
    for (date, title) in [
        ("20240703", "c"),
        ("20240701", "a"),
        ("20240703", "d"),
        ("20240702", "b"),
    ] {
        repository.store(&new_task(date, title, "")?).await?;
    }

    let all = repository.list(10).await?;
    let limited = repository.list(2).await?;

    let titles: Vec<_> = all.iter().map(|task| task.title().as_str()).collect();
    eyre::ensure!(titles == ["a", "b", "c", "d"], "unexpected order {titles:?}");
    eyre::ensure!(limited.len() == 2, "limit should apply");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_stored_fields(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let repository = db.repository();
    let id = repository.store(&new_task("20240615", "Old", "y")?).await?;
    let replacement = Task::from_new(id, new_task("20250101", "New", "")?);

    repository.update(&replacement).await?;

    let found = repository.find_by_id(id).await?;
    eyre::ensure!(found.as_ref() == Some(&replacement), "update not persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reschedule_writes_only_the_date(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let repository = db.repository();
    let id = repository.store(&new_task("20240615", "Old", "y")?).await?;
    let edited = Task::from_new(id, new_task("20240615", "Edited", "d 3")?);
    repository.update(&edited).await?;

    repository
        .reschedule(id, TaskDate::parse("20250615")?)
        .await?;

    let found = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("rescheduled task missing"))?;
    eyre::ensure!(found.date().to_string() == "20250615", "date not moved");
    eyre::ensure!(found.title().as_str() == "Edited", "title was overwritten");
    eyre::ensure!(found.repeat_str() == "d 3", "repeat was overwritten");
    eyre::ensure!(found.comment() == "comment for Edited", "comment was overwritten");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_rows_are_reported_as_not_found(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let repository = db.repository();
    let ghost = TaskId::from_i64(77);

    let update = repository
        .update(&Task::from_new(ghost, new_task("20240615", "Ghost", "")?))
        .await;
    let reschedule = repository
        .reschedule(ghost, TaskDate::parse("20240615")?)
        .await;
    let delete = repository.delete(ghost).await;
    let find = repository.find_by_id(ghost).await?;

    eyre::ensure!(
        matches!(update, Err(TaskRepositoryError::NotFound(id)) if id == ghost),
        "update should be not found, got {update:?}"
    );
    eyre::ensure!(
        matches!(reschedule, Err(TaskRepositoryError::NotFound(id)) if id == ghost),
        "reschedule should be not found, got {reschedule:?}"
    );
    eyre::ensure!(
        matches!(delete, Err(TaskRepositoryError::NotFound(id)) if id == ghost),
        "delete should be not found, got {delete:?}"
    );
    eyre::ensure!(find.is_none(), "lookup should be empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_keeps_existing_rows(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let id = db.repository().store(&new_task("20240615", "Keep", "")?).await?;

    let reopened = open_pool(&db.path, 1)?;
    let repository = SqliteTaskRepository::new(reopened);

    eyre::ensure!(
        repository.find_by_id(id).await?.is_some(),
        "schema bootstrap must not drop data"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_rows_surface_as_persistence_errors(
    database: Result<TestDatabase, eyre::Report>,
) -> Result<(), eyre::Report> {
    let db = database?;
    let mut connection = db.pool.get()?;
    connection.batch_execute(
        "INSERT INTO scheduler (date, title, comment, repeat) VALUES ('tomorrow', 'Bad', '', '');",
    )?;
    drop(connection);

    let result = db.repository().list(10).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::Persistence(_))),
        "expected persistence error, got {result:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn legacy_null_columns_read_as_empty() -> Result<(), eyre::Report> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scheduler.db").to_string_lossy().into_owned();
    let mut legacy = SqliteConnection::establish(&path)?;
    legacy.batch_execute(concat!(
        "CREATE TABLE scheduler (",
        "id INTEGER PRIMARY KEY AUTOINCREMENT, ",
        "date CHAR(8) NOT NULL DEFAULT '', ",
        "title VARCHAR(255) NOT NULL DEFAULT '', ",
        "comment TEXT, ",
        "repeat VARCHAR(128));",
        "INSERT INTO scheduler (date, title, comment, repeat) ",
        "VALUES ('20240615', 'Legacy', NULL, NULL);",
    ))?;
    drop(legacy);

    let repository = SqliteTaskRepository::new(open_pool(&path, 1)?);
    let tasks = repository.list(10).await?;

    let [task] = tasks.as_slice() else {
        eyre::bail!("expected one legacy task, got {tasks:?}");
    };
    eyre::ensure!(task.title().as_str() == "Legacy", "title mismatch");
    eyre::ensure!(task.comment().is_empty(), "NULL comment should read as empty");
    eyre::ensure!(task.is_one_off(), "NULL repeat should read as one-off");
    Ok(())
}
