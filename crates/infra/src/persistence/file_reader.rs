use std::{fs::File, path::Path};

use crate::platform;

/// Convenience helpers for opening the counted file with consistent options.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` read-only, shareable with concurrent readers.
    pub fn open_shared(path: &Path) -> std::io::Result<File> {
        platform::shared_sequential_read().open(path)
    }
}
