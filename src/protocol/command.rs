//! Command definitions
//!
//! Represents a validated request.

use std::path::Path;

use super::Payload;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Get,
    Set,
}

impl CommandType {
    /// Match a header token exactly (case-sensitive, no trimming)
    pub fn from_token(token: &[u8]) -> Option<Self> {
        match token {
            b"get" => Some(CommandType::Get),
            b"set" => Some(CommandType::Set),
            _ => None,
        }
    }

    /// Wire token for this command
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Get => "get",
            CommandType::Set => "set",
        }
    }
}

/// A parsed command, borrowing its filename from the input buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Copy a file to the output stream
    Get { filename: &'a Path },

    /// Store `length` payload bytes, found at `payload_offset`, into a file
    Set {
        filename: &'a Path,
        length: usize,
        payload_offset: usize,
        payload: Payload<'a>,
    },
}

impl<'a> Command<'a> {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
        }
    }

    /// Target file of the command
    pub fn filename(&self) -> &'a Path {
        match *self {
            Command::Get { filename } | Command::Set { filename, .. } => filename,
        }
    }
}
