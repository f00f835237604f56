//! Forwards records from the `log` facade to a [`Logger`](super::Logger)

use log::{Level, LevelFilter, Metadata, Record};

use super::error::LogResult;
use super::traits::SharedLogger;
use crate::types::{compose_message, CallSite, Severity};

/// `log::Log` implementation writing through any [`Logger`](super::Logger)
///
/// Every level is accepted. Non-Info records get the same call-site suffix as
/// the `log_*!` macros, with the module path in place of the function name.
pub struct LogBridge {
    logger: SharedLogger,
}

impl LogBridge {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }

    /// Register as the `log` crate's global logger. Only one call per process can succeed.
    pub fn install(logger: SharedLogger) -> LogResult<()> {
        log::set_boxed_logger(Box::new(Self::new(logger)))?;
        log::set_max_level(LevelFilter::Trace);
        Ok(())
    }
}

impl std::fmt::Debug for LogBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogBridge").finish_non_exhaustive()
    }
}

/// Map a `log` level onto a severity
pub fn severity_for(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warn,
        Level::Info => Severity::Info,
        Level::Debug => Severity::Debug,
        Level::Trace => Severity::Trace,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let severity = severity_for(record.level());
        let call_site = CallSite::new(
            record.file().unwrap_or("<unknown>"),
            record.module_path().unwrap_or_else(|| record.target()),
            record.line().unwrap_or(0),
        );
        let message = compose_message(severity, *record.args(), call_site);
        self.logger.write_log(severity, &message);
    }

    fn flush(&self) {}
}
