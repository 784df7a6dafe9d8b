//! Scheduled task management.
//!
//! Tasks carry a `YYYYMMDD` due date and an optional recurrence rule. The
//! module follows hexagonal architecture:
//!
//! - Domain types, the recurrence engine and lifecycle rules in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod tests;
