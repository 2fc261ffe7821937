//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Repositories and credential ports get hand-written in-memory versions so
//! service and HTTP tests can inspect what was stored. The email-check ports
//! are small enough for `mockall` automocks, which live beside the traits;
//! the static versions here are for tests that only need a fixed answer.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
