//! Logger configuration and environment overrides

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Default output file, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "EasyLog.log";

/// Default per-line message capacity in bytes
pub const DEFAULT_LINE_BUFFER_SIZE: usize = 1024;

/// Overrides `file_name`
pub const ENV_FILE: &str = "EASYLOG_FILE";

/// Overrides `line_buffer_size`
pub const ENV_LINE_BUFFER_SIZE: &str = "EASYLOG_LINE_BUFFER_SIZE";

/// Overrides `disable_sink`
pub const ENV_DISABLE: &str = "EASYLOG_DISABLE";

/// Configuration for an [`EasyLog`](crate::logging::EasyLog) instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Path of the log file, opened once in truncate mode
    pub file_name: PathBuf,
    /// Messages longer than `line_buffer_size - 1` bytes are truncated
    pub line_buffer_size: usize,
    /// When set, nothing is written to the file or stdout; the observer still fires
    pub disable_sink: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            line_buffer_size: DEFAULT_LINE_BUFFER_SIZE,
            disable_sink: false,
        }
    }
}

impl LogConfig {
    /// Create a configuration with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file
    pub fn with_file_name(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Set the per-line message capacity
    pub fn with_line_buffer_size(mut self, size: usize) -> Self {
        self.line_buffer_size = size;
        self
    }

    /// Silence the file/stdout sink
    pub fn with_sink_disabled(mut self, disabled: bool) -> Self {
        self.disable_sink = disabled;
        self
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    /// Build a configuration from the defaults plus `EASYLOG_*` overrides.
    ///
    /// Values that fail to parse leave the default in place.
    pub fn from_env() -> Self {
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), but rejects unparsable values
    pub fn try_from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.trim().is_empty()) {
            config.file_name = PathBuf::from(file);
        }

        if let Some(raw) = lookup(ENV_LINE_BUFFER_SIZE) {
            config.line_buffer_size = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid_value(ENV_LINE_BUFFER_SIZE, raw.as_str()))?;
        }

        if let Some(raw) = lookup(ENV_DISABLE) {
            config.disable_sink = parse_flag(&raw)
                .ok_or_else(|| ConfigError::invalid_value(ENV_DISABLE, raw.as_str()))?;
        }

        Ok(config)
    }

    fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup(ENV_FILE).filter(|v| !v.trim().is_empty()) {
            config.file_name = PathBuf::from(file);
        }
        if let Some(size) = lookup(ENV_LINE_BUFFER_SIZE).and_then(|v| v.trim().parse().ok()) {
            config.line_buffer_size = size;
        }
        if let Some(disabled) = lookup(ENV_DISABLE).and_then(|v| parse_flag(&v)) {
            config.disable_sink = disabled;
        }

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
