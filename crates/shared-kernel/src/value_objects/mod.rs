// crates/shared-kernel/src/value_objects/mod.rs
pub mod byte_range;
pub mod counts;
pub mod file_info;

pub use byte_range::ByteRange;
pub use counts::LineCount;
pub use file_info::{FilePath, FileSize};
