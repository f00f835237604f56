//! Test helpers

use parking_lot::Mutex;

use super::traits::Logger;
use crate::types::Severity;

/// Logger that keeps every message it receives
#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub lines: Mutex<Vec<(Severity, String)>>,
}

impl Logger for RecordingLogger {
    fn write_log(&self, severity: Severity, message: &str) {
        self.lines.lock().push((severity, message.to_string()));
    }
}
