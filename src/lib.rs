//! # memofile
//!
//! A one-shot file protocol over a single input stream:
//! - `get` copies a named file to the output stream
//! - `set` stores a binary payload of an exact declared length into a file
//! - Headers are newline-delimited text; the payload is opaque bytes
//! - The whole input is buffered before any byte is interpreted
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Input Stream (stdin)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  read to EOF
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      InputBuffer                             │
//! │           (one owned buffer, borrowed everywhere)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ HeaderLines │─────────▶│   Parser    │
//!   │ (tokenizer) │          │ (get / set) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │  payload view (set)
//!                                   ▼
//!                           ┌─────────────┐
//!                           │FileTransfer │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transfer;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MemoError, Result};
pub use config::Config;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of memofile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
