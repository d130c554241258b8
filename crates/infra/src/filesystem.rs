// crates/infra/src/filesystem.rs
use std::io::ErrorKind;

use county_ports::FileProbe;
use county_shared_kernel::{FilePath, FileSize, InfrastructureError, Result};

/// [`FileProbe`] backed by `std::fs::metadata`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileProbe;

impl FileProbe for StdFileProbe {
    fn file_size(&self, path: &FilePath) -> Result<FileSize> {
        let metadata = std::fs::metadata(path.as_path()).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                InfrastructureError::FileNotFound { path: path.to_path_buf() }
            } else {
                InfrastructureError::FileSystemOperation {
                    operation: "stat".to_string(),
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        if !metadata.is_file() {
            return Err(InfrastructureError::NotAFile { path: path.to_path_buf() }.into());
        }
        Ok(FileSize::new(metadata.len()))
    }
}
