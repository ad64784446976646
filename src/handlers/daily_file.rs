//! Day-rotating file handler
//!
//! An append-only file sink that rolls the file forward at calendar-day
//! boundaries. Rotation is checked on every write call, never by timer: a
//! logger with no traffic simply never rotates.

use super::file::FileHandler;
use crate::core::{LogHandler, LoggerError, LogLevel, LogMessage, Result};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// File sink with date-boundary rotation.
///
/// Tracks the local date on which the current file was opened. The first
/// write on any later date closes the file, renames it to
/// `<path><YYYYMMDD>` (suffix = the file's open date, not the rotation
/// date) and reopens a fresh file at the original path. At most one rename
/// happens per write call; writes on the open date itself never rotate.
///
/// A freshly constructed handler records *today* as the open date, even
/// when the path already held data from an earlier run. Callers resuming
/// an existing file across a restart can restore its true date with
/// [`DayRotatingFileHandler::with_creation_date`].
pub struct DayRotatingFileHandler {
    inner: FileHandler,
    creation_date: NaiveDate,
}

impl DayRotatingFileHandler {
    pub fn new(path: impl Into<PathBuf>, min_level: LogLevel) -> Self {
        Self {
            inner: FileHandler::new(path, min_level),
            creation_date: Local::now().date_naive(),
        }
    }

    /// Override the recorded open date of the current file.
    #[must_use]
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = date;
        self
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Rename target for a file opened on `date`: the original path with a
    /// `YYYYMMDD` suffix appended.
    fn rotated_path(path: &Path, date: NaiveDate) -> PathBuf {
        let mut rotated = path.as_os_str().to_os_string();
        rotated.push(date.format("%Y%m%d").to_string());
        PathBuf::from(rotated)
    }

    /// Roll the file forward by one if the calendar day has advanced.
    ///
    /// On rename failure the current file stays in place and keeps
    /// receiving writes; the unchanged open date means the next write
    /// retries the rotation.
    fn rotate_if_due(&mut self) -> Result<()> {
        let today = Local::now().date_naive();
        if today <= self.creation_date {
            return Ok(());
        }

        let rotated = Self::rotated_path(self.inner.path(), self.creation_date);
        self.inner.close();
        let renamed = fs::rename(self.inner.path(), &rotated);
        self.inner.reopen();

        match renamed {
            Ok(()) => {
                self.creation_date = today;
                Ok(())
            }
            Err(e) => Err(LoggerError::rotation(
                self.inner.path().display().to_string(),
                e.to_string(),
            )),
        }
    }
}

impl LogHandler for DayRotatingFileHandler {
    fn write(&mut self, msg: &LogMessage) -> Result<()> {
        if self.inner.is_open() {
            if let Err(e) = self.rotate_if_due() {
                eprintln!("[SULOG WARN] {}; continuing with current file", e);
            }
        }
        self.inner.write(msg)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }

    fn name(&self) -> &str {
        "daily_file"
    }
}
