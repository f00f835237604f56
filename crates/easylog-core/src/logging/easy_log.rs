//! File-backed logger with stdout fallback and an observer callback
//!
//! Each `EasyLog` truncates its output file on creation and writes a start
//! marker. Every line is flushed immediately. When the file cannot be opened,
//! lines go to stdout for the logger's whole lifetime. The observer receives
//! every rendered line, even while the sink is disabled.

use std::cell::RefCell;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use parking_lot::ReentrantMutex;

use super::error::LogError;
use super::traits::Logger;
use crate::config::LogConfig;
use crate::types::{truncate_message, LogLine, Severity};

/// Message of the first line written by every logger
pub const START_MARKER: &str = "------------------ LOG SYSTEM START ------------------ ";

/// Message of the last line written by every logger
pub const END_MARKER: &str = "------------------ LOG SYSTEM END ------------------ ";

/// Callback invoked with the severity and the fully rendered line
pub type Observer = Arc<dyn Fn(Severity, &str) + Send + Sync>;

/// Where rendered lines currently go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    File,
    Stdout,
    /// Sink silenced by configuration; only the observer sees lines
    Disabled,
    /// Logger closed; nothing is written or observed
    Closed,
}

enum Sink {
    File(File),
    Stdout,
}

impl Sink {
    fn open(path: &Path) -> Result<File, LogError> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| LogError::open(path, e))
    }

    fn write_line(&mut self, line: &str) {
        let result = match self {
            Sink::File(file) => file.write_all(line.as_bytes()).and_then(|_| file.flush()),
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes()).and_then(|_| out.flush())
            }
        };

        // Best effort: a failed write goes to stderr, the handle is kept
        if result.is_err() {
            let _ = io::stderr().write_all(line.as_bytes());
        }
    }
}

struct LogState {
    /// `None` once the logger is closed
    sink: Option<Sink>,
    observer: Option<Observer>,
}

/// The logger: one output destination and at most one observer
///
/// All state sits behind a single reentrant lock, held for the whole
/// render/write/flush/notify sequence of a call. Lines from different threads
/// never interleave. An observer may log through the same logger without
/// deadlocking.
pub struct EasyLog {
    config: LogConfig,
    open_error: Option<LogError>,
    state: ReentrantMutex<RefCell<LogState>>,
}

impl EasyLog {
    /// Open the configured file and write the start marker
    pub fn new(config: LogConfig) -> Self {
        Self::create(config, None)
    }

    /// Like [`new`](Self::new), with the observer registered before the start marker
    pub fn with_observer<F>(config: LogConfig, observer: F) -> Self
    where
        F: Fn(Severity, &str) + Send + Sync + 'static,
    {
        Self::create(config, Some(Arc::new(observer)))
    }

    fn create(config: LogConfig, observer: Option<Observer>) -> Self {
        let (sink, open_error) = match Sink::open(config.file_name()) {
            Ok(file) => (Sink::File(file), None),
            Err(e) => (Sink::Stdout, Some(e)),
        };

        let logger = Self {
            config,
            open_error,
            state: ReentrantMutex::new(RefCell::new(LogState {
                sink: Some(sink),
                observer,
            })),
        };
        logger.emit(Severity::Info, START_MARKER);
        logger
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Why the file could not be opened, if the logger fell back to stdout
    pub fn open_error(&self) -> Option<&LogError> {
        self.open_error.as_ref()
    }

    pub fn sink_kind(&self) -> SinkKind {
        let guard = self.state.lock();
        let state = guard.borrow();
        match state.sink {
            None => SinkKind::Closed,
            Some(_) if self.config.disable_sink => SinkKind::Disabled,
            Some(Sink::File(_)) => SinkKind::File,
            Some(Sink::Stdout) => SinkKind::Stdout,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sink_kind() == SinkKind::Closed
    }

    /// Register the observer, replacing any previous one
    pub fn set_observer<F>(&self, observer: F)
    where
        F: Fn(Severity, &str) + Send + Sync + 'static,
    {
        self.set_shared_observer(Arc::new(observer));
    }

    pub fn set_shared_observer(&self, observer: Observer) {
        let guard = self.state.lock();
        guard.borrow_mut().observer = Some(observer);
    }

    pub fn clear_observer(&self) {
        let guard = self.state.lock();
        guard.borrow_mut().observer = None;
    }

    pub fn has_observer(&self) -> bool {
        self.state.lock().borrow().observer.is_some()
    }

    /// Write the end marker and release the file. Idempotent.
    pub fn close(&self) {
        let guard = self.state.lock();
        if guard.borrow().sink.is_none() {
            return;
        }

        self.emit(Severity::Info, END_MARKER);

        let sink = guard.borrow_mut().sink.take();
        if let Some(Sink::File(mut file)) = sink {
            let _ = file.flush();
        }
    }

    /// Render, write and notify. `message` is used as-is.
    fn emit(&self, severity: Severity, message: &str) {
        let guard = self.state.lock();

        let (line, observer) = {
            let mut state = guard.borrow_mut();
            let Some(sink) = state.sink.as_mut() else {
                return;
            };

            let line = LogLine::now(severity, message).render();

            if !self.config.disable_sink {
                sink.write_line(&line);
            }
            (line, state.observer.clone())
        };

        // Borrow released: the observer may log or swap itself out
        if let Some(observer) = observer {
            observer(severity, &line);
        }
    }
}

impl Logger for EasyLog {
    fn write_log(&self, severity: Severity, message: &str) {
        self.emit(severity, truncate_message(message, self.config.line_buffer_size));
    }
}

impl Drop for EasyLog {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for EasyLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasyLog")
            .field("config", &self.config)
            .field("sink", &self.sink_kind())
            .field("has_observer", &self.has_observer())
            .finish()
    }
}
