//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific logic so the rest of the crate can
//! stay free of conditional compilation.

use std::fs::OpenOptions;

// ============================================================================
// File Access
// ============================================================================

/// Open options for a read-only handle that other readers may share.
///
/// On Windows the handle is additionally hinted for sequential scanning.
pub fn shared_sequential_read() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true);

    #[cfg(windows)]
    {
        use std::os::windows::fs::OpenOptionsExt;

        const FILE_SHARE_READ: u32 = 0x0000_0001;
        const FILE_SHARE_WRITE: u32 = 0x0000_0002;
        const FILE_FLAG_SEQUENTIAL_SCAN: u32 = 0x0800_0000;
        options
            .share_mode(FILE_SHARE_READ | FILE_SHARE_WRITE)
            .custom_flags(FILE_FLAG_SEQUENTIAL_SCAN);
    }

    options
}

// ============================================================================
// Parallelism
// ============================================================================

/// Worker count used when none is configured: one per logical CPU.
pub fn default_worker_count() -> usize {
    num_cpus::get().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_worker_count_is_positive() {
        assert!(default_worker_count() >= 1);
    }

    #[test]
    fn shared_read_opens_existing_file_twice() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let first = shared_sequential_read().open(file.path());
        let second = shared_sequential_read().open(file.path());
        assert!(first.is_ok());
        assert!(second.is_ok());
    }
}
