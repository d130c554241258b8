// crates/ports/src/range_counter.rs
use county_domain::CountConfig;
use county_shared_kernel::{ByteRange, LineCount, Result};

/// Port for counting newline bytes in one byte range of the configured file.
///
/// Counting is split in two so that per-worker setup (opening a handle,
/// seeking) can happen before the start barrier and stay out of the timed
/// window.
pub trait RangeCounter: Send + Sync {
    /// Acquire whatever the range needs to be read, positioned at `range.start()`.
    fn prepare(&self, config: &CountConfig, range: ByteRange) -> Result<Box<dyn PreparedRange>>;

    /// Prepare and count in one step.
    fn count(&self, config: &CountConfig, range: ByteRange) -> Result<LineCount> {
        self.prepare(config, range)?.count()
    }
}

/// A range that is ready to be read.
pub trait PreparedRange: Send {
    fn range(&self) -> ByteRange;

    /// Read the range to its end (or to EOF, whichever comes first).
    fn count(self: Box<Self>) -> Result<LineCount>;
}
