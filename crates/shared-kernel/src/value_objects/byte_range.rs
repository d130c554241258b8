// crates/shared-kernel/src/value_objects/byte_range.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Half-open byte interval `[start, end)` of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ByteRange {
    start: u64,
    end: u64,
}

impl ByteRange {
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] when `start > end`.
    pub fn new(start: u64, end: u64) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// `[start, start + len)`, saturating at `u64::MAX`.
    #[inline]
    pub const fn spanning(start: u64, len: u64) -> Self {
        Self { start, end: start.saturating_add(len) }
    }

    #[inline]
    pub const fn empty_at(offset: u64) -> Self {
        Self { start: offset, end: offset }
    }

    #[inline]
    pub const fn start(self) -> u64 {
        self.start
    }

    #[inline]
    pub const fn end(self) -> u64 {
        self.end
    }

    #[inline]
    pub const fn len(self) -> u64 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(self, offset: u64) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
