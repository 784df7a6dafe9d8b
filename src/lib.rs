//! todo-scheduler: recurring and one-off reminders behind a JSON API.
//!
//! Each task has a `YYYYMMDD` due date and an optional recurrence rule
//! (`d N` for every `N` days, `y` for yearly). Completing a recurring task
//! moves it to its next occurrence; completing a one-off task removes it.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the recurrence engine and lifecycle rules, free of I/O
//! - **Ports**: the storage contract used by services
//! - **Adapters**: in-memory and `SQLite` storage, the HTTP router
//!
//! # Modules
//!
//! - [`task`]: task domain, storage and lifecycle service
//! - [`api`]: axum router and handlers
//! - [`config`]: environment-driven server settings

pub mod api;
pub mod config;
pub mod task;
