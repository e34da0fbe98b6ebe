//! Response definitions
//!
//! Represents the outcome of a request and the fixed replies sent for it.

use std::io::Write;

use crate::error::Result;

/// Reply written to the output stream after a successful `set`
pub const OK_REPLY: &[u8] = b"OK\n";

/// Reply written to the error stream after any failure
pub const INVALID_COMMAND_REPLY: &[u8] = b"Invalid Command\n";

/// Final status of an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    InvalidCommand = 1,
}

impl Status {
    /// Process exit code for this status
    pub fn exit_code(&self) -> u8 {
        *self as u8
    }
}

/// A successfully completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// `get`: file contents were copied to the output stream
    Sent { bytes: u64 },

    /// `set`: payload was written to the target file
    Stored { bytes: u64 },
}

impl Response {
    pub fn status(&self) -> Status {
        Status::Ok
    }

    /// Bytes moved by the request
    pub fn bytes(&self) -> u64 {
        match *self {
            Response::Sent { bytes } | Response::Stored { bytes } => bytes,
        }
    }
}

/// Write the `set` confirmation
pub fn write_ok<W: Write + ?Sized>(writer: &mut W) -> Result<()> {
    writer.write_all(OK_REPLY)?;
    writer.flush()?;
    Ok(())
}

/// Write the failure message
pub fn write_invalid_command<W: Write + ?Sized>(writer: &mut W) -> Result<()> {
    writer.write_all(INVALID_COMMAND_REPLY)?;
    writer.flush()?;
    Ok(())
}
