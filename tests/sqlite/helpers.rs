//! Shared fixtures for `SQLite` integration tests.

use rstest::fixture;
use tempfile::TempDir;
use todo_scheduler::task::adapters::sqlite::{SqliteTaskRepository, TaskSqlitePool, open_pool};

/// Pool over a database file that lives as long as the temporary directory.
pub struct TestDatabase {
    pub pool: TaskSqlitePool,
    pub path: String,
    _dir: TempDir,
}

impl TestDatabase {
    /// Builds a repository over the test pool.
    #[must_use]
    pub fn repository(&self) -> SqliteTaskRepository {
        SqliteTaskRepository::new(self.pool.clone())
    }
}

/// Opens a fresh `scheduler.db` inside a temporary directory.
#[fixture]
pub fn database() -> Result<TestDatabase, eyre::Report> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("scheduler.db").to_string_lossy().into_owned();
    let pool = open_pool(&path, 2)?;
    Ok(TestDatabase {
        pool,
        path,
        _dir: dir,
    })
}
