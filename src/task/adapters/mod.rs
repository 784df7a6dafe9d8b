//! Adapter implementations for task lifecycle ports.
//!
//! - [`memory`]: lock-guarded map used by tests and local tooling
//! - [`sqlite`]: Diesel-backed `SQLite` storage used by the server

pub mod memory;
pub mod sqlite;
