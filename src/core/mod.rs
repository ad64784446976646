//! Core engine types: messages, handlers, loggers, registry, guard

pub mod error;
pub mod guard;
pub mod handler;
pub mod log_level;
pub mod log_message;
pub mod logger;
pub mod registry;
pub mod stats;

pub use error::{LoggerError, Result};
pub use guard::LogGuard;
pub use handler::LogHandler;
pub use log_level::LogLevel;
pub use log_message::LogMessage;
pub use logger::{Logger, DEFAULT_SHUTDOWN_TIMEOUT};
pub use registry::{LoggerRegistry, ROOT_LOGGER};
pub use stats::LoggerStats;
