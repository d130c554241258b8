// crates/ports/src/filesystem.rs
use county_shared_kernel::{FilePath, FileSize, Result};

/// Port for inspecting the target file before any worker is launched.
pub trait FileProbe: Send + Sync {
    /// Size of the regular file at `path`.
    ///
    /// Missing paths and non-regular files are errors.
    fn file_size(&self, path: &FilePath) -> Result<FileSize>;
}
