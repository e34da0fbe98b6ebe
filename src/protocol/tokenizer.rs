//! Header tokenizer
//!
//! Splits the front of an [`InputBuffer`](super::InputBuffer) into
//! newline-delimited header lines without copying. The delimiter is consumed
//! and never part of a line.

/// Header line delimiter
pub const DELIMITER: u8 = b'\n';

/// A borrowed header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    bytes: &'a [u8],
    start: usize,
    end: usize,
    terminated: bool,
}

impl<'a> HeaderLine<'a> {
    /// Line contents, delimiter excluded
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the first byte of the line
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset one past the last byte (the delimiter position, or buffer end)
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether a delimiter followed this line
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// Iterator over the header lines of a buffer
///
/// A trailing line with no delimiter is still yielded. A buffer ending in a
/// delimiter yields no trailing empty line.
#[derive(Debug, Clone)]
pub struct HeaderLines<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> HeaderLines<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset right after the last consumed delimiter
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Bytes not yet scanned
    pub fn remainder(&self) -> &'a [u8] {
        let buf = self.buf;
        &buf[self.pos..]
    }

    /// Restart from the beginning of the buffer
    pub fn reset(&mut self) {
        self.pos = 0;
    }
}

impl<'a> Iterator for HeaderLines<'a> {
    type Item = HeaderLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let buf = self.buf;
        if self.pos >= buf.len() {
            return None;
        }

        let start = self.pos;
        let rest = &buf[start..];

        let line = match rest.iter().position(|&b| b == DELIMITER) {
            Some(idx) => {
                self.pos = start + idx + 1;
                HeaderLine {
                    bytes: &rest[..idx],
                    start,
                    end: start + idx,
                    terminated: true,
                }
            }
            None => {
                self.pos = buf.len();
                HeaderLine {
                    bytes: rest,
                    start,
                    end: buf.len(),
                    terminated: false,
                }
            }
        };

        Some(line)
    }
}

impl std::iter::FusedIterator for HeaderLines<'_> {}
