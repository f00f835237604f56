//! The rendered log line

use chrono::{DateTime, Local};

use super::Severity;

/// Platform line terminator appended to every rendered line
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Second-resolution timestamp format
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single log line; built, rendered and dropped within one write
#[derive(Debug, Clone)]
pub struct LogLine<'a> {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: &'a str,
}

impl<'a> LogLine<'a> {
    /// Stamp `message` with the current local time
    pub fn now(severity: Severity, message: &'a str) -> Self {
        Self::at(Local::now(), severity, message)
    }

    pub fn at(timestamp: DateTime<Local>, severity: Severity, message: &'a str) -> Self {
        Self {
            timestamp,
            severity,
            message,
        }
    }

    /// `[YYYY-MM-DD HH:MM:SS <label>] <message>` plus the line terminator
    pub fn render(&self) -> String {
        format!(
            "[{} {}] {}{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.severity.label(),
            self.message,
            LINE_ENDING
        )
    }
}

/// Cut `message` to at most `capacity - 1` bytes, backing off to a char boundary.
pub fn truncate_message(message: &str, capacity: usize) -> &str {
    let limit = capacity.saturating_sub(1);
    if message.len() <= limit {
        return message;
    }
    let mut end = limit;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2014, 11, 26, 11, 10, 54).unwrap()
    }

    #[test]
    fn test_render_info() {
        let line = LogLine::at(fixed_time(), Severity::Info, "i'm sollyu");
        assert_eq!(
            line.render(),
            format!("[2014-11-26 11:10:54 LOG_INFO ] i'm sollyu{LINE_ENDING}")
        );
    }

    #[test]
    fn test_render_error() {
        let line = LogLine::at(
            fixed_time(),
            Severity::Error,
            "I'm sollyu (main.cpp : main : 20 )",
        );
        assert_eq!(
            line.render(),
            format!("[2014-11-26 11:10:54 LOG_ERROR] I'm sollyu (main.cpp : main : 20 ){LINE_ENDING}")
        );
    }

    #[test]
    fn test_render_now_shape() {
        let rendered = LogLine::now(Severity::Warn, "x").render();
        let body = rendered.strip_suffix(LINE_ENDING).unwrap();
        let bytes = body.as_bytes();

        assert_eq!(bytes[0], b'[');
        assert_eq!(bytes[5], b'-');
        assert_eq!(bytes[8], b'-');
        assert_eq!(bytes[11], b' ');
        assert_eq!(bytes[14], b':');
        assert_eq!(bytes[17], b':');
        assert_eq!(&body[20..], " LOG_WARN ] x");
    }

    #[test]
    fn test_truncate_short_message_untouched() {
        assert_eq!(truncate_message("hello", 1024), "hello");
        assert_eq!(truncate_message("hello", 6), "hello");
    }

    #[test]
    fn test_truncate_to_capacity_minus_one() {
        let long = "a".repeat(2000);
        assert_eq!(truncate_message(&long, 1024).len(), 1023);
        assert_eq!(truncate_message("hello", 5), "hell");
    }

    #[test]
    fn test_truncate_degenerate_capacity() {
        assert_eq!(truncate_message("hello", 1), "");
        assert_eq!(truncate_message("hello", 0), "");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        // "é" is two bytes; a limit of 2 would split it
        assert_eq!(truncate_message("aé", 3), "a");
        assert_eq!(truncate_message("日本語", 5), "日");
    }
}
