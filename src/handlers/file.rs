//! File handler implementation

use crate::core::{LogHandler, LoggerError, LogLevel, LogMessage, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only file sink.
///
/// The target path is opened once, at construction. Parent directories are
/// never created and the open is never retried: an unopenable path leaves
/// the handler in a degraded state where every write is a silent no-op.
/// Each successful write reaches the file before `write` returns.
pub struct FileHandler {
    path: PathBuf,
    min_level: LogLevel,
    file: Option<File>,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>, min_level: LogLevel) -> Self {
        let path = path.into();
        let file = Self::open_append(&path);
        Self {
            path,
            min_level,
            file,
        }
    }

    fn open_append(path: &Path) -> Option<File> {
        OpenOptions::new().create(true).append(true).open(path).ok()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// False when construction could not open the target path.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Drop the current handle. Rotation closes before renaming.
    pub(crate) fn close(&mut self) {
        self.file = None;
    }

    /// Reopen the target path in append mode, replacing the current handle.
    pub(crate) fn reopen(&mut self) {
        self.file = Self::open_append(&self.path);
    }
}

impl LogHandler for FileHandler {
    fn write(&mut self, msg: &LogMessage) -> Result<()> {
        if !msg.should_emit(self.min_level) {
            return Ok(());
        }
        // Degraded sink: the message is dropped without surfacing an error.
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let mut line = msg.render();
        line.push('\n');
        // `File` is unbuffered: the line reaches the OS before we return.
        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::file_sink(self.path.display().to_string(), e.to_string()))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_appends_one_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let mut handler = FileHandler::new(&path, LogLevel::Debug);
        assert!(handler.is_open());
        handler
            .write(&LogMessage::new(LogLevel::Info, "a.rs", "a", 1, "hello"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.ends_with('\n'));
        assert!(content.contains("[INFO]: hello"));
    }

    #[test]
    fn test_missing_parent_directory_degrades_silently() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("app.log");

        let mut handler = FileHandler::new(&path, LogLevel::Debug);
        assert!(!handler.is_open());
        // Writes are dropped without an error.
        assert!(handler
            .write(&LogMessage::new(LogLevel::Fatal, "a.rs", "a", 1, "lost"))
            .is_ok());
        assert!(!path.exists());
    }

    #[test]
    fn test_filtered_message_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let mut handler = FileHandler::new(&path, LogLevel::Warn);
        handler
            .write(&LogMessage::new(LogLevel::Info, "a.rs", "a", 1, "quiet"))
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_reopen_after_construction_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing line\n").unwrap();

        let mut handler = FileHandler::new(&path, LogLevel::Debug);
        handler
            .write(&LogMessage::new(LogLevel::Info, "a.rs", "a", 1, "appended"))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing line\n"));
        assert_eq!(content.lines().count(), 2);
    }
}
