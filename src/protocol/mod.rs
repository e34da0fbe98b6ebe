//! Protocol Module
//!
//! Defines the request format read from the input stream.
//!
//! ## Protocol Format
//!
//! The input is read to EOF into one [`InputBuffer`], then interpreted in two
//! regions: newline-delimited header lines, and (for `set` only) an opaque
//! payload that starts right after the third header line.
//!
//! ```text
//! ┌───────┬────────────┬──────────┬──────────────────────────────┐
//! │ set\n │ <name>\n   │ <len>\n  │ payload (len raw bytes)      │
//! └───────┴────────────┴──────────┴──────────────────────────────┘
//!  ◄──────────── header lines ────────────►◄── never scanned ────►
//! ```
//!
//! ### Commands
//! - `get`: copy `<name>` to the output stream
//! - `set`: write the payload to `<name>`, reply `OK\n`
//!
//! ### Replies
//! - success: file contents (`get`) or `OK\n` (`set`) on the output stream
//! - failure: `Invalid Command\n` on the error stream

mod buffer;
mod command;
mod parser;
mod payload;
mod response;
mod tokenizer;

pub use buffer::InputBuffer;
pub use command::{Command, CommandType};
pub use parser::{parse_command, parse_filename, parse_length};
pub use payload::{frame_payload, Payload};
pub use response::{
    write_invalid_command, write_ok, Response, Status, INVALID_COMMAND_REPLY, OK_REPLY,
};
pub use tokenizer::{HeaderLine, HeaderLines, DELIMITER};
