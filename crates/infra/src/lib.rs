//! # Infrastructure
//!
//! File-backed adapters for the ports defined in `county_ports`.

#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod platform;

pub use filesystem::StdFileProbe;
pub use measurement::FileRangeCounter;
pub use platform::default_worker_count;
