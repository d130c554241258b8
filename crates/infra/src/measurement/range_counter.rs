// crates/infra/src/measurement/range_counter.rs
//! ファイルのバイト範囲ごとに改行を数える

use std::{
    fs::File,
    io::{ErrorKind, Read, Seek, SeekFrom},
    path::PathBuf,
};

use county_domain::CountConfig;
use county_ports::{PreparedRange, RangeCounter};
use county_shared_kernel::{ByteRange, InfrastructureError, LineCount, Result};
use tracing::trace;

use crate::persistence::FileReader;

/// [`RangeCounter`] that opens its own handle on the configured file per range.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileRangeCounter;

impl RangeCounter for FileRangeCounter {
    fn prepare(&self, config: &CountConfig, range: ByteRange) -> Result<Box<dyn PreparedRange>> {
        if range.is_empty() {
            return Ok(Box::new(EmptyRange(range)));
        }

        let path = config.file_path().to_path_buf();
        let mut file = FileReader::open_shared(&path)
            .map_err(|source| InfrastructureError::FileOpen { path: path.clone(), source })?;
        file.seek(SeekFrom::Start(range.start())).map_err(|source| {
            InfrastructureError::FileSeek { path: path.clone(), offset: range.start(), source }
        })?;

        let buffer_len = range.len().min(config.chunk_size().get() as u64) as usize;
        trace!(%range, buffer_len, "range prepared");
        Ok(Box::new(FileRange { file, path, range, buffer: vec![0; buffer_len] }))
    }
}

/// An open handle positioned at the start of its range, with its own buffer.
struct FileRange {
    file: File,
    path: PathBuf,
    range: ByteRange,
    buffer: Vec<u8>,
}

impl PreparedRange for FileRange {
    fn range(&self) -> ByteRange {
        self.range
    }

    fn count(self: Box<Self>) -> Result<LineCount> {
        let Self { mut file, path, range, mut buffer } = *self;
        let mut position = range.start();
        let mut lines = 0u64;

        while position < range.end() {
            let wanted = (range.end() - position).min(buffer.len() as u64) as usize;
            let read = match file.read(&mut buffer[..wanted]) {
                // File shrank underneath us; whatever was read so far stands.
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(InfrastructureError::FileRead { path, offset: position, source }.into());
                }
            };
            lines += bytecount::count(&buffer[..read], b'\n') as u64;
            position += read as u64;
        }

        Ok(LineCount::new(lines))
    }
}

/// Zero-length work; never touches the file.
struct EmptyRange(ByteRange);

impl PreparedRange for EmptyRange {
    fn range(&self) -> ByteRange {
        self.0
    }

    fn count(self: Box<Self>) -> Result<LineCount> {
        Ok(LineCount::zero())
    }
}
