//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: partitions the file and runs one worker per range
//! - [`sync`]: the start barrier, completion aggregator and shared stopwatch
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;
pub mod sync;

pub use orchestrator::CountFileLines;
