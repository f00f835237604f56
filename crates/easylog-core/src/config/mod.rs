//! Logger configuration
//!
//! Recognized options:
//! - `file_name`: output file, truncated at start-up (default `EasyLog.log`)
//! - `line_buffer_size`: per-line message capacity in bytes (default 1024)
//! - `disable_sink`: silence file/stdout output while still notifying the observer

mod error;
mod log_config;

pub use error::{ConfigError, ConfigResult};
pub use log_config::{
    LogConfig, DEFAULT_FILE_NAME, DEFAULT_LINE_BUFFER_SIZE,
    ENV_DISABLE, ENV_FILE, ENV_LINE_BUFFER_SIZE,
};
