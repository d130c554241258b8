//! Tests that drive the compiled binary.

mod common;

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
