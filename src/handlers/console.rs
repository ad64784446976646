//! Console handler implementation

use crate::core::{LogHandler, LogLevel, LogMessage, Result};
use colored::Colorize;
use parking_lot::Mutex;
use std::io::Write;

// Every console handler in the process shares this lock so concurrently
// delivering loggers never interleave within a single output line.
static CONSOLE_LOCK: Mutex<()> = Mutex::new(());

pub struct ConsoleHandler {
    min_level: LogLevel,
    use_colors: bool,
}

impl ConsoleHandler {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            use_colors: false,
        }
    }

    /// Colorize each line by its level. Off by default so the emitted
    /// bytes match the rendered line exactly.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl LogHandler for ConsoleHandler {
    fn write(&mut self, msg: &LogMessage) -> Result<()> {
        if !msg.should_emit(self.min_level) {
            return Ok(());
        }
        let line = msg.render();

        let _serial = CONSOLE_LOCK.lock();
        if self.use_colors {
            println!("{}", line.color(msg.level.color_code()));
        } else {
            println!("{}", line);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suppressed_level_is_a_no_op() {
        let mut handler = ConsoleHandler::new(LogLevel::Error);
        let msg = LogMessage::new(LogLevel::Debug, "a.rs", "a", 1, "hidden");
        assert!(handler.write(&msg).is_ok());
    }

    #[test]
    fn test_emitting_write_succeeds() {
        let mut handler = ConsoleHandler::new(LogLevel::Debug).with_colors(true);
        let msg = LogMessage::new(LogLevel::Fatal, "a.rs", "a", 1, "shown");
        assert!(handler.write(&msg).is_ok());
        assert!(handler.flush().is_ok());
    }
}
