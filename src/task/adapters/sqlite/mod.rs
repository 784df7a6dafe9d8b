//! `SQLite` adapters for task persistence.

mod models;
mod pool;
mod repository;
mod schema;

pub use pool::{CREATE_SCHEMA_SQL, TaskSqlitePool, open_pool};
pub use repository::SqliteTaskRepository;
