//! File Transfer
//!
//! Moves bytes between the target file and the caller's streams.
//!
//! ## Responsibilities
//! - `get`: copy a file to the output stream chunk by chunk
//! - `set`: create/truncate a file and write the payload into it
//! - Tolerate short reads and short writes
//!
//! Every chunk goes through `Write::write_all`, which keeps writing until the
//! whole chunk is accepted and retries `Interrupted`. A writer that accepts
//! zero bytes fails with `WriteZero`.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::{MemoError, Result};

/// Performs the filesystem side of a command
#[derive(Debug, Clone)]
pub struct FileTransfer {
    /// Scratch chunk size for file reads
    chunk_size: usize,

    /// Permission bits for created files
    file_mode: u32,
}

impl FileTransfer {
    pub fn new(config: &Config) -> Self {
        Self {
            chunk_size: config.chunk_size.max(1),
            file_mode: config.file_mode,
        }
    }

    /// Copy the file at `path` to `out`, returning the byte count
    pub fn send_file<W: Write + ?Sized>(&self, path: &Path, out: &mut W) -> Result<u64> {
        let mut file = File::open(path).map_err(|e| {
            MemoError::invalid(format!("cannot open {} for reading: {}", path.display(), e))
        })?;

        let copied = self.copy_chunks(&mut file, out)?;
        out.flush()?;

        tracing::trace!(path = %path.display(), bytes = copied, "file sent");
        Ok(copied)
    }

    /// Create or truncate the file at `path` and write `payload` into it
    pub fn store_file(&self, path: &Path, payload: &[u8]) -> Result<u64> {
        let mut file = self.open_for_write(path).map_err(|e| {
            MemoError::invalid(format!("cannot open {} for writing: {}", path.display(), e))
        })?;

        file.write_all(payload)?;
        file.flush()?;

        tracing::trace!(path = %path.display(), bytes = payload.len(), "file stored");
        Ok(payload.len() as u64)
    }

    /// Copy `reader` to `writer` through a scratch chunk until EOF
    pub fn copy_chunks<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<u64>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut chunk = vec![0u8; self.chunk_size];
        let mut total: u64 = 0;

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => return Ok(total),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(MemoError::Io(e)),
            };

            writer.write_all(&chunk[..n])?;
            total += n as u64;
        }
    }

    #[cfg(unix)]
    fn open_for_write(&self, path: &Path) -> io::Result<File> {
        use std::os::unix::fs::OpenOptionsExt;

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(self.file_mode)
            .open(path)
    }

    #[cfg(not(unix))]
    fn open_for_write(&self, path: &Path) -> io::Result<File> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
    }
}
