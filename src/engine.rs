//! Engine Module
//!
//! Runs one request from input stream to reply.
//!
//! ## Responsibilities
//! - Accumulate the input stream into an [`InputBuffer`]
//! - Parse and validate the command
//! - Hand the command to [`FileTransfer`]
//! - Map every failure to the single user-visible reply and exit status

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::Result;
use crate::protocol::{
    parse_command, write_invalid_command, write_ok, Command, InputBuffer, Response, Status,
};
use crate::transfer::FileTransfer;

/// Request engine
///
/// One engine serves any number of sequential requests; each call to
/// [`Engine::run`] or [`Engine::execute`] is independent.
#[derive(Debug, Clone)]
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// Filesystem side of every command
    transfer: FileTransfer,
}

impl Engine {
    /// Create an engine with the given config
    pub fn new(config: Config) -> Self {
        let transfer = FileTransfer::new(&config);
        Self { config, transfer }
    }

    /// The config this engine was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one request and report the outcome
    ///
    /// On failure, `Invalid Command\n` is written to `err` and
    /// [`Status::InvalidCommand`] is returned, whatever the cause.
    pub fn run<R, W, E>(&self, input: &mut R, out: &mut W, err: &mut E) -> Status
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        match self.execute(input, out) {
            Ok(response) => {
                tracing::debug!(?response, "request completed");
                response.status()
            }
            Err(e) => {
                tracing::debug!(error = %e, kind = ?e.kind(), "request failed");
                if let Err(report) = write_invalid_command(err) {
                    tracing::warn!("Failed to report invalid command: {}", report);
                }
                Status::InvalidCommand
            }
        }
    }

    /// Read the whole of `input`, then execute the command it carries
    pub fn execute<R, W>(&self, input: &mut R, out: &mut W) -> Result<Response>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let buffer = InputBuffer::read_from(input, &self.config)?;
        self.execute_buffer(&buffer, out)
    }

    /// Execute the command carried by an already accumulated buffer
    pub fn execute_buffer<W: Write + ?Sized>(
        &self,
        buffer: &InputBuffer,
        out: &mut W,
    ) -> Result<Response> {
        let command = parse_command(buffer, &self.config)?;

        tracing::debug!(
            command = command.command_type().as_str(),
            filename = %command.filename().display(),
            "command accepted"
        );

        match command {
            Command::Get { filename } => {
                let bytes = self.transfer.send_file(filename, out)?;
                Ok(Response::Sent { bytes })
            }
            Command::Set { filename, payload, .. } => {
                let bytes = self.transfer.store_file(filename, payload.as_bytes())?;
                write_ok(out)?;
                Ok(Response::Stored { bytes })
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
