//! Unit tests for the task domain and lifecycle service.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

pub(crate) mod support;
