//! No-op logger implementation

use super::traits::Logger;
use crate::types::Severity;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn write_log(&self, _severity: Severity, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_logger() {
        let logger = NoOpLogger::new();

        for severity in Severity::ALL {
            logger.write_log(severity, "dropped");
        }
        logger.fatal("still nothing");
    }
}
