//! Call-site capture for non-Info messages

use std::fmt;

use super::Severity;

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self { file, function, line }
    }
}

/// Renders as the suffix appended to the message, leading space included
impl fmt::Display for CallSite<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ({} : {} : {} )", self.file, self.function, self.line)
    }
}

/// Build a message body: format first, then append the call site unless `severity` is Info.
pub fn compose_message(severity: Severity, args: fmt::Arguments<'_>, call_site: CallSite<'_>) -> String {
    let mut message = fmt::format(args);
    if severity.carries_call_site() {
        message.push_str(&call_site.to_string());
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_site_suffix() {
        let site = CallSite::new("main.cpp", "main", 20);
        assert_eq!(site.to_string(), " (main.cpp : main : 20 )");
    }

    #[test]
    fn test_compose_error_has_suffix() {
        let site = CallSite::new("main.cpp", "main", 20);
        let message = compose_message(Severity::Error, format_args!("I'm {}", "sollyu"), site);
        assert_eq!(message, "I'm sollyu (main.cpp : main : 20 )");
    }

    #[test]
    fn test_compose_info_has_no_suffix() {
        let site = CallSite::new("main.cpp", "main", 19);
        let message = compose_message(Severity::Info, format_args!("i'm {}", "sollyu"), site);
        assert_eq!(message, "i'm sollyu");
    }

    #[test]
    fn test_compose_formats_before_suffix() {
        // Braces in the suffix must not be interpreted as format arguments
        let site = CallSite::new("src/{weird}.rs", "f", 1);
        let message = compose_message(Severity::Debug, format_args!("{}%s", 5), site);
        assert_eq!(message, "5%s (src/{weird}.rs : f : 1 )");
    }
}
