//! Handler implementations

pub mod console;
pub mod daily_file;
pub mod file;

pub use console::ConsoleHandler;
pub use daily_file::DayRotatingFileHandler;
pub use file::FileHandler;

// Re-export the trait alongside its implementations
pub use crate::core::LogHandler;
