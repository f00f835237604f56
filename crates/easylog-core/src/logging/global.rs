//! Process-wide logger
//!
//! The process instance is an ordinary [`EasyLog`] held in a static. It is
//! created either explicitly with [`init`] or lazily by [`instance`] from
//! [`LogConfig::from_env`]. Rust never runs destructors for statics, so the
//! end marker is written by [`shutdown`], which the [`ShutdownGuard`] returned
//! from [`init`] calls on drop.
//!
//! ```no_run
//! use easylog_core::{global, LogConfig};
//!
//! fn main() {
//!     let _guard = global::init(LogConfig::new().with_file_name("app.log"))
//!         .expect("logger initialized once");
//!
//!     global::info("ready");
//!     easylog_core::log_error!("bad input: {}", 42);
//! }
//! ```

use once_cell::sync::OnceCell;

use super::easy_log::EasyLog;
use super::error::{LogError, LogResult};
use super::traits::Logger;
use crate::config::LogConfig;
use crate::types::Severity;

static INSTANCE: OnceCell<EasyLog> = OnceCell::new();

/// Writes the end marker of the process logger when dropped
#[must_use = "dropping the guard immediately closes the process logger"]
#[derive(Debug)]
pub struct ShutdownGuard {
    _private: (),
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        let _ = shutdown();
    }
}

/// Create the process logger with an explicit configuration
pub fn init(config: LogConfig) -> LogResult<ShutdownGuard> {
    install(|| EasyLog::new(config))
}

/// Create the process logger with an observer that also sees the start marker
pub fn init_with_observer<F>(config: LogConfig, observer: F) -> LogResult<ShutdownGuard>
where
    F: Fn(Severity, &str) + Send + Sync + 'static,
{
    install(|| EasyLog::with_observer(config, observer))
}

fn install(create: impl FnOnce() -> EasyLog) -> LogResult<ShutdownGuard> {
    let mut created = false;
    INSTANCE.get_or_init(|| {
        created = true;
        create()
    });

    if created {
        Ok(ShutdownGuard { _private: () })
    } else {
        Err(LogError::AlreadyInitialized)
    }
}

/// The process logger, created from the environment on first use
pub fn instance() -> &'static EasyLog {
    INSTANCE.get_or_init(|| EasyLog::new(LogConfig::from_env()))
}

/// The process logger, if it has been created
pub fn try_instance() -> Option<&'static EasyLog> {
    INSTANCE.get()
}

pub fn is_initialized() -> bool {
    INSTANCE.get().is_some()
}

/// Write the end marker and close the process logger's file
pub fn shutdown() -> LogResult<()> {
    let logger = INSTANCE.get().ok_or(LogError::NotInitialized)?;
    logger.close();
    Ok(())
}

/// Log a message at the specified severity
pub fn write_log(severity: Severity, message: &str) {
    instance().write_log(severity, message);
}

/// Log a message at the default severity (`Error`)
pub fn write_text(message: &str) {
    instance().write_text(message);
}

/// Log a trace message
pub fn trace(message: &str) {
    write_log(Severity::Trace, message);
}

/// Log a debug message
pub fn debug(message: &str) {
    write_log(Severity::Debug, message);
}

/// Log an info message
pub fn info(message: &str) {
    write_log(Severity::Info, message);
}

/// Log a warning message
pub fn warn(message: &str) {
    write_log(Severity::Warn, message);
}

/// Log an error message
pub fn error(message: &str) {
    write_log(Severity::Error, message);
}

/// Log an alarm message
pub fn alarm(message: &str) {
    write_log(Severity::Alarm, message);
}

/// Log a fatal message
pub fn fatal(message: &str) {
    write_log(Severity::Fatal, message);
}

/// Register the observer of the process logger
pub fn set_observer<F>(observer: F)
where
    F: Fn(Severity, &str) + Send + Sync + 'static,
{
    instance().set_observer(observer);
}

pub fn clear_observer() {
    instance().clear_observer();
}
