//! テストフィクスチャ管理

use std::{io::Write, path::Path};

use county_domain::CountConfig;
use tempfile::NamedTempFile;

/// Temporary file holding exactly `contents`.
pub fn file_with(contents: &[u8]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("create temp file");
    tmp.write_all(contents).expect("write temp file");
    tmp.flush().expect("flush temp file");
    tmp
}

/// `lines` lines of varying width, each terminated by `\n`.
#[allow(dead_code)]
pub fn generated_lines(lines: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..lines {
        out.extend(std::iter::repeat_n(b'a' + (i % 26) as u8, i % 97));
        out.push(b'\n');
    }
    out
}

#[allow(dead_code)]
pub fn config(path: &Path, chunk_size: usize, workers: usize) -> CountConfig {
    CountConfig::new(path, chunk_size, workers).expect("valid config")
}
