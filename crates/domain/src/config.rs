// crates/domain/src/config.rs
use std::num::NonZeroUsize;

use county_shared_kernel::{DomainError, DomainResult, FilePath};

/// Bytes requested per read when no chunk size is given.
pub const DEFAULT_CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// Resolved, immutable parameters of one counting run.
///
/// Shared read-only by every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    file_path: FilePath,
    chunk_size: NonZeroUsize,
    worker_count: NonZeroUsize,
}

impl CountConfig {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] when `chunk_size` or
    /// `worker_count` is zero.
    pub fn new(
        file_path: impl Into<FilePath>,
        chunk_size: usize,
        worker_count: usize,
    ) -> DomainResult<Self> {
        let chunk_size = NonZeroUsize::new(chunk_size).ok_or_else(|| {
            DomainError::InvalidConfiguration {
                reason: "chunk size must be greater than 0".to_string(),
            }
        })?;
        let worker_count = NonZeroUsize::new(worker_count).ok_or_else(|| {
            DomainError::InvalidConfiguration {
                reason: "worker count must be greater than 0".to_string(),
            }
        })?;
        Ok(Self { file_path: file_path.into(), chunk_size, worker_count })
    }

    pub fn file_path(&self) -> &FilePath {
        &self.file_path
    }

    pub fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    pub fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }
}
