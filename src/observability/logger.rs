//! Structured JSON logger.
//!
//! Events are upper-snake names ("RECORD_CREATED"); fields are flat
//! string pairs. Keys are emitted in sorted order so identical events
//! produce identical lines.

use std::fmt;
use std::io::{self, Write};

use std::collections::BTreeMap;

use serde_json::Value;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger writing one JSON object per line.
pub struct Logger;

impl Logger {
    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Info, event, fields, &mut io::stdout());
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Warn, event, fields, &mut io::stdout());
    }

    /// Log at ERROR level (stderr)
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::emit(Severity::Error, event, fields, &mut io::stderr());
    }

    fn emit<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], writer: &mut W) {
        // BTreeMap keeps keys sorted, which gives the deterministic
        // ordering for free. (serde_json::Map would too, but a dependency
        // enables serde_json's `preserve_order` feature, which switches it
        // to insertion order.)
        let mut line = BTreeMap::new();
        line.insert("event".to_string(), Value::String(event.to_string()));
        line.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        for (key, value) in fields {
            line.insert((*key).to_string(), Value::String((*value).to_string()));
        }

        if let Ok(text) = serde_json::to_string(&line) {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

/// Capture a log line into a string for testing.
#[cfg(test)]
fn capture(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::emit(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_line_is_valid_json() {
        let output = capture(Severity::Info, "TEST_EVENT", &[("key", "value")]);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "TEST_EVENT");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["key"], "value");
    }

    #[test]
    fn test_deterministic_field_ordering() {
        let first = capture(Severity::Info, "TEST", &[("zebra", "1"), ("apple", "2")]);
        let second = capture(Severity::Info, "TEST", &[("apple", "2"), ("zebra", "1")]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_line_per_event() {
        let output = capture(Severity::Warn, "TEST", &[("a", "1"), ("b", "2")]);
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_special_characters_escaped() {
        let output = capture(Severity::Error, "TEST", &[("message", "line1\n\"quoted\"")]);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["message"], "line1\n\"quoted\"");
    }
}
