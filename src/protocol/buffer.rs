//! Input buffer
//!
//! Accumulates the whole input stream before anything is interpreted.

use std::io::{self, Read};

use bytes::{Bytes, BytesMut};

use crate::config::Config;
use crate::error::{MemoError, Result};
use super::payload::{frame_payload, Payload};
use super::tokenizer::HeaderLines;

/// The complete request, exactly as read from the input stream
///
/// Header lines and the `set` payload are borrowed views into this buffer,
/// so nothing derived from a request can outlive it.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    /// Every byte read, no terminator appended
    data: Bytes,

    /// Whether the final byte was `\n`
    ends_with_newline: bool,
}

impl InputBuffer {
    /// Read `reader` to EOF
    ///
    /// Reads go through a scratch chunk of `config.chunk_size` bytes. Any read
    /// error other than `Interrupted` aborts before a single byte is
    /// interpreted.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R, config: &Config) -> Result<Self> {
        let mut scratch = vec![0u8; config.chunk_size.max(1)];
        let mut data = BytesMut::with_capacity(scratch.len());

        loop {
            let n = match reader.read(&mut scratch) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(MemoError::Io(e)),
            };

            let size = data.len() + n;
            if size > config.max_input_size {
                return Err(MemoError::InputTooLarge {
                    size,
                    max: config.max_input_size,
                });
            }

            data.extend_from_slice(&scratch[..n]);
        }

        tracing::trace!(total_size = data.len(), "input accumulated");

        Ok(Self::from_bytes(data.freeze()))
    }

    /// Wrap bytes that are already in memory
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let ends_with_newline = data.last() == Some(&b'\n');
        Self {
            data,
            ends_with_newline,
        }
    }

    /// Exact number of bytes read
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True iff the last byte of the input is `\n`
    pub fn ends_with_newline(&self) -> bool {
        self.ends_with_newline
    }

    /// Raw view of the whole buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Header lines, starting from the first byte
    pub fn lines(&self) -> HeaderLines<'_> {
        HeaderLines::new(&self.data)
    }

    /// Opaque view of `length` bytes starting at `offset`
    pub fn payload(&self, offset: usize, length: usize) -> Result<Payload<'_>> {
        frame_payload(self, offset, length)
    }
}
