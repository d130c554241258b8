//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: File metadata lookup ahead of a run
//! - [`range_counter`]: Counting newline bytes inside one byte range
//!
//! These ports allow the use case layer to remain independent of the
//! concrete file access used by the binary.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod range_counter;

pub use filesystem::FileProbe;
pub use range_counter::{PreparedRange, RangeCounter};
