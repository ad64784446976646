//! Log message structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One log event: severity, capture time, source location and the already
/// rendered message text.
///
/// Immutable after construction. Template formatting happens before a
/// `LogMessage` exists; the engine only ever carries the final string.
#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub file: String,
    pub function: String,
    pub line: u32,
    pub text: String,
}

impl LogMessage {
    /// Collapse newlines, carriage returns and tabs so one call always
    /// produces one output line, even with hostile message content.
    fn sanitize_text(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Capture a message at the current local wall-clock time.
    pub fn new(
        level: LogLevel,
        file: &str,
        function: &str,
        line: u32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            level,
            timestamp: Local::now(),
            file: file.to_string(),
            function: function.to_string(),
            line,
            text: Self::sanitize_text(&text.into()),
        }
    }

    /// True iff a sink with the given minimum level emits this message.
    pub fn should_emit(&self, sink_min_level: LogLevel) -> bool {
        sink_min_level <= self.level
    }

    /// Render the fixed single-line output form:
    /// `YYYY-MM-DD HH:MM:SS.mmm <file> (<function> -> <line>) [<LEVEL>]: <text>`
    pub fn render(&self) -> String {
        format!(
            "{} {} ({} -> {}) [{}]: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.file,
            self.function,
            self.line,
            self.level,
            self.text
        )
    }
}
