//! Tests for Engine
//!
//! These tests verify:
//! - SET stores payloads and replies OK
//! - GET streams file contents verbatim
//! - SET then GET round-trips for every payload size
//! - Failures reply `Invalid Command` and leave the filesystem alone

use std::fs;
use std::io::Cursor;
use std::path::Path;

use memofile::config::{Config, LengthParsing};
use memofile::engine::Engine;
use memofile::protocol::{Response, Status, INVALID_COMMAND_REPLY, OK_REPLY};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

struct Outcome {
    status: Status,
    out: Vec<u8>,
    err: Vec<u8>,
}

fn run(engine: &Engine, input: &[u8]) -> Outcome {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = engine.run(&mut Cursor::new(input.to_vec()), &mut out, &mut err);
    Outcome { status, out, err }
}

fn get_request(path: &Path) -> Vec<u8> {
    format!("get\n{}\n", path.display()).into_bytes()
}

fn set_request(path: &Path, payload: &[u8]) -> Vec<u8> {
    let mut request = format!("set\n{}\n{}\n", path.display(), payload.len()).into_bytes();
    request.extend_from_slice(payload);
    request
}

fn assert_rejected(outcome: &Outcome) {
    assert_eq!(outcome.status, Status::InvalidCommand);
    assert_eq!(outcome.status.exit_code(), 1);
    assert_eq!(outcome.err, INVALID_COMMAND_REPLY);
    assert!(outcome.out.is_empty());
}

// =============================================================================
// SET Tests
// =============================================================================

#[test]
fn test_set_stores_payload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.bin");
    let engine = Engine::default();

    let outcome = run(&engine, &set_request(&path, b"hello\nworld\0!"));

    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(outcome.status.exit_code(), 0);
    assert_eq!(outcome.out, OK_REPLY);
    assert!(outcome.err.is_empty());
    assert_eq!(fs::read(&path).unwrap(), b"hello\nworld\0!");
}

#[test]
fn test_set_zero_length_creates_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty");
    let engine = Engine::default();

    let outcome = run(&engine, &set_request(&path, b""));

    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(outcome.out, b"OK\n");
    assert_eq!(fs::read(&path).unwrap(), b"");
}

#[test]
fn test_set_ignores_bytes_after_payload() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("trimmed");
    let engine = Engine::default();

    let mut request = set_request(&path, b"keep");
    request.extend_from_slice(b"drop me");
    let outcome = run(&engine, &request);

    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(fs::read(&path).unwrap(), b"keep");
}

#[test]
fn test_set_insufficient_payload_does_not_touch_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("precious");
    fs::write(&path, b"original").unwrap();
    let engine = Engine::default();

    let request = format!("set\n{}\n100\nonly a few bytes", path.display());
    let outcome = run(&engine, request.as_bytes());

    assert_rejected(&outcome);
    assert_eq!(fs::read(&path).unwrap(), b"original");
}

#[test]
fn test_set_insufficient_payload_does_not_create_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("never");
    let engine = Engine::default();

    let request = format!("set\n{}\n5\nabc", path.display());
    let outcome = run(&engine, request.as_bytes());

    assert_rejected(&outcome);
    assert!(!path.exists());
}

#[test]
fn test_set_malformed_length_strict_vs_lenient() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("lenient");
    let request = format!("set\n{}\nabc\n", path.display());

    let strict = run(&Engine::default(), request.as_bytes());
    assert_rejected(&strict);
    assert!(!path.exists());

    let lenient_engine = Engine::new(
        Config::builder()
            .length_parsing(LengthParsing::Lenient)
            .build(),
    );
    let lenient = run(&lenient_engine, request.as_bytes());
    assert_eq!(lenient.status, Status::Ok);
    assert_eq!(fs::read(&path).unwrap(), b"");
}

// =============================================================================
// GET Tests
// =============================================================================

#[test]
fn test_get_streams_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("source");
    let contents: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
    fs::write(&path, &contents).unwrap();

    let outcome = run(&Engine::default(), &get_request(&path));

    assert_eq!(outcome.status, Status::Ok);
    assert_eq!(outcome.out, contents);
    assert!(outcome.err.is_empty());
}

#[test]
fn test_get_missing_file_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing");

    assert_rejected(&run(&Engine::default(), &get_request(&path)));
}

#[test]
fn test_get_without_trailing_newline_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("source");
    fs::write(&path, b"data").unwrap();

    let request = format!("get\n{}", path.display());

    assert_rejected(&run(&Engine::default(), request.as_bytes()));
}

#[test]
fn test_get_with_extra_line_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("source");
    fs::write(&path, b"data").unwrap();

    let request = format!("get\n{}\nextra\n", path.display());

    assert_rejected(&run(&Engine::default(), request.as_bytes()));
}

// =============================================================================
// Round-trip Tests
// =============================================================================

#[test]
fn test_set_then_get_round_trip() {
    let temp = TempDir::new().unwrap();
    let engine = Engine::new(Config::builder().chunk_size(64).build());

    for size in [0usize, 1, 63, 64, 65, 4096, 70_000] {
        let path = temp.path().join(format!("blob-{}", size));
        let payload: Vec<u8> = (0..size).map(|i| (i % 13) as u8 + b'\0').collect();

        let stored = run(&engine, &set_request(&path, &payload));
        assert_eq!(stored.status, Status::Ok, "set of {} bytes", size);

        let fetched = run(&engine, &get_request(&path));
        assert_eq!(fetched.status, Status::Ok, "get of {} bytes", size);
        assert_eq!(fetched.out, payload, "round trip of {} bytes", size);
    }
}

#[test]
fn test_execute_reports_response() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("resp");
    let engine = Engine::default();

    let mut out = Vec::new();
    let stored = engine
        .execute(&mut Cursor::new(set_request(&path, b"12345")), &mut out)
        .unwrap();
    assert_eq!(stored, Response::Stored { bytes: 5 });

    let mut out = Vec::new();
    let sent = engine
        .execute(&mut Cursor::new(get_request(&path)), &mut out)
        .unwrap();
    assert_eq!(sent, Response::Sent { bytes: 5 });
    assert_eq!(sent.bytes(), 5);
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_empty_input_rejected() {
    assert_rejected(&run(&Engine::default(), b""));
}

#[test]
fn test_unknown_command_does_not_touch_filesystem() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("foo");

    let request = format!("delete\n{}\n", path.display());

    assert_rejected(&run(&Engine::default(), request.as_bytes()));
    assert!(!path.exists());
}

#[test]
fn test_oversized_input_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("big");
    let engine = Engine::new(Config::builder().max_input_size(64).build());

    let outcome = run(&engine, &set_request(&path, &[b'z'; 128]));

    assert_rejected(&outcome);
    assert!(!path.exists());
}
