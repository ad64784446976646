//! Registry owning every named logger and the process-wide delivery mode

use super::{
    handler::LogHandler,
    log_level::LogLevel,
    logger::{Logger, DEFAULT_SHUTDOWN_TIMEOUT},
    stats::LoggerStats,
};
use crate::handlers::{ConsoleHandler, DayRotatingFileHandler, FileHandler};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Name of the logger created at registry construction, and the default
/// target of the root-level trace macros.
pub const ROOT_LOGGER: &str = "_ROOT_";

/// Sleep between idle polls while draining queues.
const FLUSH_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Owner of the name → logger map and of the shared async-mode flag.
///
/// Constructed explicitly and shared as `Arc<LoggerRegistry>`; there is no
/// hidden process-wide instance, so startup and shutdown ordering are in
/// the caller's hands. A handler-less [`ROOT_LOGGER`] exists from
/// construction on.
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Logger>>,
    /// Read by every push; written only through `set_async_mode`.
    async_mode: Arc<AtomicBool>,
}

impl LoggerRegistry {
    /// Construct a registry with the root logger and synchronous delivery.
    pub fn new() -> Arc<Self> {
        let registry = Arc::new(Self {
            loggers: RwLock::new(HashMap::new()),
            async_mode: Arc::new(AtomicBool::new(false)),
        });
        registry.add_logger(ROOT_LOGGER, None);
        registry
    }

    /// Get-or-create the named logger, then attach the handler if one is
    /// supplied.
    ///
    /// Calling with an existing name never recreates the logger or touches
    /// its in-flight queue; it only appends the handler. Map mutation is
    /// serialized by the registry lock, so concurrent first use of a name
    /// still creates exactly one logger and one worker.
    pub fn add_logger(&self, name: &str, handler: Option<Box<dyn LogHandler>>) {
        let mut loggers = self.loggers.write();
        let logger = loggers
            .entry(name.to_string())
            .or_insert_with(|| Logger::spawn(name, Arc::clone(&self.async_mode)));
        if let Some(handler) = handler {
            logger.add_handler(handler);
        }
    }

    /// Attach a console sink to the named logger, creating it on first use.
    pub fn add_console_logger(&self, name: &str, level: LogLevel) {
        self.add_logger(name, Some(Box::new(ConsoleHandler::new(level))));
    }

    /// Attach a file sink to the named logger, creating it on first use.
    ///
    /// With `daily` set the sink rolls the file at calendar-day boundaries.
    /// The parent directory must already exist; otherwise the sink opens in
    /// degraded no-op state and every write is silently dropped.
    pub fn add_file_logger(&self, name: &str, path: impl Into<PathBuf>, level: LogLevel, daily: bool) {
        let handler: Box<dyn LogHandler> = if daily {
            Box::new(DayRotatingFileHandler::new(path, level))
        } else {
            Box::new(FileHandler::new(path, level))
        };
        self.add_logger(name, Some(handler));
    }

    /// Switch the process-wide delivery mode for all loggers.
    pub fn set_async_mode(&self, enabled: bool) {
        self.async_mode.store(enabled, Ordering::Relaxed);
    }

    pub fn async_mode(&self) -> bool {
        self.async_mode.load(Ordering::Relaxed)
    }

    /// Route one message to the named logger.
    ///
    /// Fire-and-forget: a name that was never registered drops the message
    /// silently. Tracing never creates loggers.
    pub fn trace(
        &self,
        name: &str,
        level: LogLevel,
        file: &str,
        function: &str,
        line: u32,
        text: impl Into<String>,
    ) {
        let loggers = self.loggers.read();
        if let Some(logger) = loggers.get(name) {
            logger.push(level, file, function, line, text);
        }
    }

    /// Block until every logger's queue has been observed empty.
    ///
    /// Best-effort drain, not a barrier: messages pushed concurrently with
    /// the poll may still be in flight when this returns. Only meaningful
    /// in async mode; in sync mode every queue is already empty.
    pub fn flush_all(&self) {
        loop {
            if self.loggers.read().values().all(Logger::is_idle) {
                return;
            }
            thread::sleep(FLUSH_POLL_INTERVAL);
        }
    }

    /// Drain all queues, then stop every delivery worker.
    pub fn shutdown(&self) {
        self.flush_all();
        let mut loggers = self.loggers.write();
        for (_, mut logger) in loggers.drain() {
            logger.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn logger_count(&self) -> usize {
        self.loggers.read().len()
    }

    /// Delivery counters of the named logger, if it exists.
    pub fn logger_stats(&self, name: &str) -> Option<Arc<LoggerStats>> {
        self.loggers.read().get(name).map(Logger::stats)
    }
}

impl Drop for LoggerRegistry {
    fn drop(&mut self) {
        self.shutdown();
    }
}
