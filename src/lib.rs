//! # SuLog
//!
//! Named multi-logger trace engine with asynchronous fan-out to console,
//! file and day-rotating file sinks.
//!
//! ## Features
//!
//! - **Named loggers**: each name owns its own queue and delivery worker,
//!   so independent modules never reorder each other's output
//! - **Multiple sinks**: console, append-only file, and day-rotating file
//!   handlers, each with its own minimum level
//! - **Async or inline delivery**: one process-wide switch, installed by a
//!   scoped [`LogGuard`] that drains every queue when it leaves scope
//! - **Unobtrusive**: the public surface never returns an error; sink
//!   failures degrade silently rather than crashing the host application
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use sulog::{LogGuard, LogLevel, LoggerRegistry, ROOT_LOGGER};
//!
//! let registry = LoggerRegistry::new();
//! let _guard = LogGuard::new(Arc::clone(&registry), true);
//!
//! registry.add_console_logger(ROOT_LOGGER, LogLevel::Debug);
//! registry.add_file_logger("net", "./net.log", LogLevel::Info, false);
//!
//! sulog::info!(registry, "service starting on port {}", 8080);
//! sulog::warn_to!(registry, "net", "connection retry {}", 3);
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::handlers::{ConsoleHandler, DayRotatingFileHandler, FileHandler};
    pub use crate::core::{
        LogGuard, LogHandler, LogLevel, LogMessage, Logger, LoggerError, LoggerRegistry,
        LoggerStats, Result, DEFAULT_SHUTDOWN_TIMEOUT, ROOT_LOGGER,
    };
}

pub use crate::handlers::{ConsoleHandler, DayRotatingFileHandler, FileHandler};
pub use crate::core::{
    LogGuard, LogHandler, LogLevel, LogMessage, Logger, LoggerError, LoggerRegistry, LoggerStats,
    Result, DEFAULT_SHUTDOWN_TIMEOUT, ROOT_LOGGER,
};
