//! Payload framer
//!
//! Cuts the binary payload of a `set` out of the input buffer. The payload
//! is never scanned: newlines and NUL bytes are ordinary data.

use crate::error::{MemoError, Result};
use super::InputBuffer;

/// Opaque payload bytes borrowed from an input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Payload<'a> {
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the payload within the input buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Frame `[offset, offset + length)` of `buffer`
///
/// Fails if fewer than `length` bytes were buffered after `offset`. Bytes past
/// the end of the payload are left alone.
pub fn frame_payload(buffer: &InputBuffer, offset: usize, length: usize) -> Result<Payload<'_>> {
    let data = buffer.as_bytes();

    let available = data.len().checked_sub(offset).ok_or_else(|| {
        MemoError::invalid(format!(
            "payload offset {} beyond input of {} bytes",
            offset,
            data.len()
        ))
    })?;

    if available < length {
        return Err(MemoError::invalid(format!(
            "incomplete payload: expected {} bytes, got {}",
            length, available
        )));
    }

    Ok(Payload {
        bytes: &data[offset..offset + length],
        offset,
    })
}
