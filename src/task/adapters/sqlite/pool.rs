//! Connection pool bootstrap for the `SQLite` task store.
//!
//! Every pooled connection waits on a locked database instead of failing
//! immediately, and the `scheduler` table exists before the pool is handed
//! out.

use crate::task::ports::{TaskRepositoryError, TaskRepositoryResult};
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use log::{error, info};
use std::time::Instant;

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema applied when a database is opened.
pub const CREATE_SCHEMA_SQL: &str = concat!(
    "CREATE TABLE IF NOT EXISTS scheduler (",
    "id INTEGER PRIMARY KEY AUTOINCREMENT, ",
    "date CHAR(8) NOT NULL, ",
    "title VARCHAR(255) NOT NULL, ",
    "comment TEXT NOT NULL DEFAULT '', ",
    "repeat VARCHAR(128) NOT NULL DEFAULT ''",
    "); ",
    "CREATE INDEX IF NOT EXISTS idx_date ON scheduler(date);",
);

const CONNECTION_PRAGMAS: &str = "PRAGMA busy_timeout = 5000;";

#[derive(Debug)]
struct BusyTimeoutCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for BusyTimeoutCustomizer {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(CONNECTION_PRAGMAS)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Opens a pool on the database file at `database_url`, creating the schema
/// when absent.
///
/// # Errors
///
/// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be built
/// or the schema cannot be applied.
pub fn open_pool(database_url: &str, max_size: u32) -> TaskRepositoryResult<TaskSqlitePool> {
    let started_at = Instant::now();
    info!("event=db_open module=sqlite status=start path={database_url}");

    let result = build_pool(database_url, max_size);
    match &result {
        Ok(_) => info!(
            "event=db_open module=sqlite status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=db_open module=sqlite status=error duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }
    result
}

fn build_pool(database_url: &str, max_size: u32) -> TaskRepositoryResult<TaskSqlitePool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(BusyTimeoutCustomizer))
        .build(manager)
        .map_err(TaskRepositoryError::persistence)?;

    let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
    connection
        .batch_execute(CREATE_SCHEMA_SQL)
        .map_err(TaskRepositoryError::persistence)?;
    Ok(pool)
}
