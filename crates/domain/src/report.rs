// crates/domain/src/report.rs
use std::time::Duration;

use county_shared_kernel::{FileSize, LineCount};
use serde::Serialize;

/// Outcome of one counting run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub total_lines: LineCount,
    /// Wall-clock time between the start barrier release and the last worker finishing.
    pub elapsed: Duration,
    pub worker_count: usize,
    pub file_size: FileSize,
    /// Ranges whose I/O failed and contributed zero lines.
    pub degraded_ranges: usize,
}

impl CountReport {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// True when every range was counted without an I/O failure.
    pub fn is_complete(&self) -> bool {
        self.degraded_ranges == 0
    }
}
