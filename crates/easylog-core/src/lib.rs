//! EasyLog Core
//!
//! A process-wide leveled logger. Each line is rendered as
//! `[YYYY-MM-DD HH:MM:SS LOG_LEVEL] message`, flushed to a file (or stdout when
//! the file cannot be opened), and handed to an optional observer callback.
//!
//! ```rust,no_run
//! use easylog_core::{global, log_error, log_info, LogConfig, Severity};
//!
//! let _guard = global::init(LogConfig::default()).unwrap();
//!
//! global::set_observer(|level: Severity, line: &str| {
//!     print!("{} {}", level as u8, line);
//! });
//!
//! log_info!("i'm {}", "sollyu");   // [.. LOG_INFO ] i'm sollyu
//! log_error!("I'm {}", "sollyu");  // [.. LOG_ERROR] I'm sollyu (src/main.rs : main : 9 )
//! ```
//!
//! Loggers can also be constructed and passed around explicitly:
//!
//! ```rust,no_run
//! use easylog_core::{EasyLog, LogConfig, Logger, SharedLogger};
//! use std::sync::Arc;
//!
//! let logger: SharedLogger = Arc::new(EasyLog::new(LogConfig::new().with_file_name("worker.log")));
//! logger.warn("queue is filling up");
//! easylog_core::log_alarm!(logger: logger; "queue at {}%", 95);
//! ```

pub mod types;
pub mod config;
pub mod logging;
pub mod convert;

// Re-export commonly used types
pub use types::{CallSite, LogLine, Severity};

pub use config::{ConfigError, ConfigResult, LogConfig};

pub use logging::{
    global, EasyLog, LogBridge, LogError, LogResult,
    Logger, LoggerExt, NoOpLogger, Observer, SharedLogger, BoxedLogger, SinkKind,
};

pub use convert::{wide_chars_to_string, wide_to_string};
