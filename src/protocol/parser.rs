//! Protocol parser
//!
//! Validates the header lines of an [`InputBuffer`] and produces a
//! [`Command`]. Nothing here touches the filesystem.
//!
//! ## Request Format
//!
//! ### GET
//! ```text
//! get\n
//! <filename>\n
//! ```
//! Exactly two lines, and the input must end with the newline after the
//! filename.
//!
//! ### SET
//! ```text
//! set\n
//! <filename>\n
//! <length>\n
//! <payload: exactly `length` raw bytes>
//! ```
//! The payload starts right after the third delimiter. If the length line is
//! the last thing in the input (no delimiter), the payload is empty.
//!
//! Empty header lines count as lines: unlike a `strtok` split, `get\n\nfoo\n`
//! and `get\nfoo\n\n` are rejected on purpose.

use std::path::Path;

use crate::config::{Config, LengthParsing};
use crate::error::{MemoError, Result};
use super::payload::frame_payload;
use super::tokenizer::HeaderLines;
use super::{Command, CommandType, InputBuffer};

// =============================================================================
// Command Parsing
// =============================================================================

/// Parse the command carried by `buffer`
pub fn parse_command<'a>(buffer: &'a InputBuffer, config: &Config) -> Result<Command<'a>> {
    let mut lines = buffer.lines();

    let token = lines
        .next()
        .ok_or_else(|| MemoError::invalid("empty input"))?;

    match CommandType::from_token(token.as_bytes()) {
        Some(CommandType::Get) => parse_get(buffer, lines, config),
        Some(CommandType::Set) => parse_set(buffer, lines, config),
        None => Err(MemoError::invalid(format!(
            "unknown command: {:?}",
            String::from_utf8_lossy(token.as_bytes())
        ))),
    }
}

/// GET: `get\n<filename>\n`, nothing more
fn parse_get<'a>(
    buffer: &'a InputBuffer,
    mut lines: HeaderLines<'a>,
    config: &Config,
) -> Result<Command<'a>> {
    if !buffer.ends_with_newline() {
        return Err(MemoError::invalid("GET command: input must end with a newline"));
    }

    let filename = lines
        .next()
        .ok_or_else(|| MemoError::invalid("GET command: missing filename"))?;

    if let Some(extra) = lines.next() {
        return Err(MemoError::invalid(format!(
            "GET command: unexpected line at offset {}",
            extra.start()
        )));
    }

    let filename = parse_filename(filename.as_bytes(), config)?;
    Ok(Command::Get { filename })
}

/// SET: `set\n<filename>\n<length>\n<payload>`
fn parse_set<'a>(
    buffer: &'a InputBuffer,
    mut lines: HeaderLines<'a>,
    config: &Config,
) -> Result<Command<'a>> {
    let filename = lines
        .next()
        .ok_or_else(|| MemoError::invalid("SET command: missing filename"))?;

    let length = lines
        .next()
        .ok_or_else(|| MemoError::invalid("SET command: missing length"))?;

    let length = parse_length(length.as_bytes(), config.length_parsing)?;
    let filename = parse_filename(filename.as_bytes(), config)?;

    // Everything after the third header line is payload
    let payload_offset = lines.offset();
    let payload = frame_payload(buffer, payload_offset, length)?;

    Ok(Command::Set {
        filename,
        length,
        payload_offset,
        payload,
    })
}

// =============================================================================
// Field Parsing
// =============================================================================

/// Validate a filename header and view it as a path
///
/// Rejects empty names, names containing NUL, and names of `max_path_len`
/// bytes or more.
pub fn parse_filename<'a>(bytes: &'a [u8], config: &Config) -> Result<&'a Path> {
    if bytes.is_empty() {
        return Err(MemoError::invalid("empty filename"));
    }

    if bytes.len() >= config.max_path_len {
        return Err(MemoError::invalid(format!(
            "filename too long: {} bytes (max {})",
            bytes.len(),
            config.max_path_len.saturating_sub(1)
        )));
    }

    if bytes.contains(&0) {
        return Err(MemoError::invalid("filename contains a NUL byte"));
    }

    bytes_to_path(bytes)
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> Result<&Path> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    Ok(Path::new(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> Result<&Path> {
    std::str::from_utf8(bytes)
        .map(Path::new)
        .map_err(|_| MemoError::invalid("filename is not valid UTF-8"))
}

/// Parse the `set` length header
pub fn parse_length(token: &[u8], mode: LengthParsing) -> Result<usize> {
    match mode {
        LengthParsing::Strict => parse_strict_length(token),
        LengthParsing::Lenient => parse_lenient_length(token),
    }
}

fn parse_strict_length(token: &[u8]) -> Result<usize> {
    if token.is_empty() || !token.iter().all(u8::is_ascii_digit) {
        return Err(MemoError::invalid(format!(
            "SET command: malformed length {:?}",
            String::from_utf8_lossy(token)
        )));
    }

    digits_to_usize(token)
}

fn parse_lenient_length(token: &[u8]) -> Result<usize> {
    let start = match token.iter().position(|&b| !is_c_space(b)) {
        Some(idx) => idx,
        None => return Ok(0),
    };
    let token = &token[start..];

    let (negative, unsigned) = match token.first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let end = unsigned
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());

    let value = digits_to_usize(&unsigned[..end])?;
    if negative && value != 0 {
        return Err(MemoError::invalid(format!(
            "SET command: negative length -{}",
            value
        )));
    }

    Ok(value)
}

/// Fold ASCII digits into a usize; an empty slice is zero
fn digits_to_usize(digits: &[u8]) -> Result<usize> {
    digits
        .iter()
        .try_fold(0usize, |acc, &d| {
            acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
        })
        .ok_or_else(|| MemoError::invalid("SET command: length overflows"))
}

/// Whitespace as classified by C `isspace` in the "C" locale
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
