//! Mock implementations for testing.
//!
//! This module provides `MockFs`, `MockRunner` and pre-built scenarios for
//! testing collectors without requiring a Raspberry Pi.

mod filesystem;
mod runner;
mod scenarios;

pub use filesystem::MockFs;
pub use runner::MockRunner;
