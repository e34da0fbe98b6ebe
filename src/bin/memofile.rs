//! memofile Binary
//!
//! Reads one request from stdin and answers on stdout/stderr.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use memofile::config::LengthParsing;
use memofile::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// memofile
#[derive(Parser, Debug)]
#[command(name = "memofile")]
#[command(about = "Get or set a file through a request read from stdin")]
#[command(version)]
struct Args {
    /// Maximum request size in MB
    #[arg(long, default_value = "256")]
    max_input_mb: usize,

    /// Parse the set length like C atoi instead of digits only
    #[arg(long)]
    lenient_length: bool,
}

fn main() -> ExitCode {
    // Diagnostics are off unless asked for; stderr belongs to the protocol
    let filter = EnvFilter::try_from_env("MEMOFILE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("memofile v{}", memofile::VERSION);

    let length_parsing = if args.lenient_length {
        LengthParsing::Lenient
    } else {
        LengthParsing::Strict
    };

    let config = Config::builder()
        .max_input_size(args.max_input_mb.saturating_mul(1024 * 1024))
        .length_parsing(length_parsing)
        .build();

    let engine = Engine::new(config);

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let status = engine.run(&mut input, &mut out, &mut err);
    ExitCode::from(status.exit_code())
}
