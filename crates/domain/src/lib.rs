//! # Domain
//!
//! Pure model of a counting run: the validated [`CountConfig`], the
//! [`partition`](partition::partition) of a file into per-worker byte ranges,
//! and the final [`CountReport`].

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod partition;
pub mod report;

pub use config::CountConfig;
pub use partition::partition;
pub use report::CountReport;
