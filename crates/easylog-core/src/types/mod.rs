//! Core types shared by every logger

mod severity;
mod call_site;
mod log_line;

pub use severity::Severity;
pub use call_site::{compose_message, CallSite};
pub use log_line::{truncate_message, LogLine, LINE_ENDING, TIMESTAMP_FORMAT};
