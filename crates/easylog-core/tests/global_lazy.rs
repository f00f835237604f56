//! The process logger created on first use, configured from the environment.
//!
//! Kept in its own test binary: the process instance can only be created once.

use std::env;
use std::fs;

use easylog_core::config::{ENV_FILE, ENV_LINE_BUFFER_SIZE};
use easylog_core::logging::{END_MARKER, START_MARKER};
use easylog_core::types::LINE_ENDING;
use easylog_core::{global, log_error, SinkKind};
use tempfile::TempDir;

#[test]
fn test_first_log_call_creates_process_logger() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lazy.log");
    env::set_var(ENV_FILE, &path);
    env::set_var(ENV_LINE_BUFFER_SIZE, "8");

    assert!(!global::is_initialized());
    assert!(global::try_instance().is_none());

    log_error!("abcdefghijk");

    assert!(global::is_initialized());
    let logger = global::instance();
    assert_eq!(logger.config().file_name(), path.as_path());
    assert_eq!(logger.config().line_buffer_size, 8);
    assert_eq!(logger.sink_kind(), SinkKind::File);

    global::write_text("xyz");
    global::shutdown().unwrap();
    assert!(logger.is_closed());

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.split_terminator(LINE_ENDING).collect();
    assert_eq!(lines.len(), 4, "{contents}");
    assert!(lines[0].ends_with(&format!("LOG_INFO ] {START_MARKER}")));
    assert!(lines[1].ends_with("LOG_ERROR] abcdefg"));
    assert!(lines[2].ends_with("LOG_ERROR] xyz"));
    assert!(lines[3].ends_with(&format!("LOG_INFO ] {END_MARKER}")));
}
