//! Logging abstractions and the process-wide logger

mod traits;
mod noop;
mod error;
mod easy_log;
pub mod global;
pub mod log_bridge;
#[doc(hidden)]
pub mod macros;
#[cfg(test)]
mod testing;

pub use traits::{BoxedLogger, Logger, LoggerExt, SharedLogger};
pub use noop::NoOpLogger;
pub use error::{LogError, LogResult};
pub use easy_log::{EasyLog, Observer, SinkKind, END_MARKER, START_MARKER};
pub use log_bridge::LogBridge;
