//! Installing the `log` facade bridge.
//!
//! Kept in its own test binary: `log` accepts one global logger per process.

use std::fs;
use std::sync::Arc;

use easylog_core::types::LINE_ENDING;
use easylog_core::{EasyLog, LogBridge, LogConfig, LogError, SharedLogger};
use tempfile::TempDir;

#[test]
fn test_install_routes_log_records_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bridge.log");
    let logger = Arc::new(EasyLog::new(LogConfig::new().with_file_name(&path)));
    let shared: SharedLogger = logger.clone();

    LogBridge::install(shared.clone()).unwrap();
    assert_eq!(log::max_level(), log::LevelFilter::Trace);

    log::trace!("fine grained {}", 1);
    let warn_line = line!() + 1;
    log::warn!("disk at {}%", 91);
    log::info!("compact");

    assert!(matches!(
        LogBridge::install(shared),
        Err(LogError::SetLogger(_))
    ));

    logger.close();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.split_terminator(LINE_ENDING).collect();
    assert_eq!(lines.len(), 5, "{contents}");
    assert!(lines[1].contains("LOG_TRACE] fine grained 1 ("));
    assert!(lines[2].ends_with(&format!(
        "LOG_WARN ] disk at 91% ({} : log_bridge_install : {} )",
        file!(),
        warn_line
    )));
    assert!(lines[3].ends_with("LOG_INFO ] compact"));
}
