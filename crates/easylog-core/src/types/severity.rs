//! Log severities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Ordered log importance, from `Trace` (least) to `Fatal` (most)
///
/// Severity only selects the label of a rendered line; nothing is filtered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Alarm = 5,
    Fatal = 6,
}

impl Severity {
    /// Every severity, least severe first
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Alarm,
        Severity::Fatal,
    ];

    /// Fixed-width label used in rendered lines
    pub fn label(self) -> &'static str {
        match self {
            Severity::Trace => "LOG_TRACE",
            Severity::Debug => "LOG_DEBUG",
            Severity::Info => "LOG_INFO ",
            Severity::Warn => "LOG_WARN ",
            Severity::Error => "LOG_ERROR",
            Severity::Alarm => "LOG_ALARM",
            Severity::Fatal => "LOG_FATAL",
        }
    }

    /// Whether messages at this severity get a `(file : function : line )` suffix.
    ///
    /// Info lines stay compact.
    pub fn carries_call_site(self) -> bool {
        self != Severity::Info
    }
}

/// Severity of a line written without an explicit level
impl Default for Severity {
    fn default() -> Self {
        Severity::Error
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let name = lower.strip_prefix("log_").unwrap_or(&lower);
        match name {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "alarm" => Ok(Severity::Alarm),
            "fatal" => Ok(Severity::Fatal),
            _ => Err(ConfigError::InvalidSeverity(s.to_string())),
        }
    }
}
