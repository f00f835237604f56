//! Logger trait definition

use std::fmt;
use std::sync::Arc;

use crate::types::Severity;

/// Logger abstraction
///
/// Implementations:
/// - `EasyLog`: file sink with stdout fallback and an observer callback
/// - `NoOpLogger`: Silent logger for testing
pub trait Logger: Send + Sync {
    /// Write one line. Never fails visibly.
    fn write_log(&self, severity: Severity, message: &str);

    /// Log a trace message
    fn trace(&self, message: &str) {
        self.write_log(Severity::Trace, message);
    }

    /// Log a debug message
    fn debug(&self, message: &str) {
        self.write_log(Severity::Debug, message);
    }

    /// Log an info message
    fn info(&self, message: &str) {
        self.write_log(Severity::Info, message);
    }

    /// Log a warning message
    fn warn(&self, message: &str) {
        self.write_log(Severity::Warn, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.write_log(Severity::Error, message);
    }

    /// Log an alarm message
    fn alarm(&self, message: &str) {
        self.write_log(Severity::Alarm, message);
    }

    /// Log a fatal message
    fn fatal(&self, message: &str) {
        self.write_log(Severity::Fatal, message);
    }

    /// Log a message at the default severity (`Error`)
    fn write_text(&self, message: &str) {
        self.write_log(Severity::default(), message);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Extension trait for logging with format arguments
///
/// No call-site suffix is added here; use the `log_*!` macros for that.
pub trait LoggerExt: Logger {
    fn write_fmt_log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(message) => self.write_log(severity, message),
            None => self.write_log(severity, &args.to_string()),
        }
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}
