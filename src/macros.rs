//! Trace macros capturing source location and rendering arguments.
//!
//! The root-level macros (`debug!` .. `fatal!`) target the registry's
//! [`ROOT_LOGGER`](crate::ROOT_LOGGER); the `_to` variants take a logger
//! name. All of them capture `file!()`, `module_path!()` and `line!()` at
//! the call site and render the message with `format!` before it reaches
//! the engine, so the core only ever sees a finished string.
//!
//! # Examples
//!
//! ```
//! use sulog::{LoggerRegistry, LogLevel};
//! use sulog::{info, warn_to};
//!
//! let registry = LoggerRegistry::new();
//! registry.add_logger("net", None);
//!
//! info!(registry, "listening on port {}", 8080);
//! warn_to!(registry, "net", "retry {} of {}", 2, 5);
//! ```

/// Trace through a named logger with an explicit level.
#[macro_export]
macro_rules! log_to {
    ($registry:expr, $name:expr, $level:expr, $($arg:tt)+) => {
        $registry.trace($name, $level, file!(), module_path!(), line!(), format!($($arg)+))
    };
}

/// Trace through the root logger with an explicit level.
#[macro_export]
macro_rules! log {
    ($registry:expr, $level:expr, $($arg:tt)+) => {
        $crate::log_to!($registry, $crate::ROOT_LOGGER, $level, $($arg)+)
    };
}

/// Trace a debug-level message through the root logger.
#[macro_export]
macro_rules! debug {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Trace an info-level message through the root logger.
#[macro_export]
macro_rules! info {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Trace a warn-level message through the root logger.
#[macro_export]
macro_rules! warn {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Trace an error-level message through the root logger.
#[macro_export]
macro_rules! error {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Trace a fatal-level message through the root logger.
#[macro_export]
macro_rules! fatal {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Trace a debug-level message through a named logger.
#[macro_export]
macro_rules! debug_to {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::log_to!($registry, $name, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Trace an info-level message through a named logger.
#[macro_export]
macro_rules! info_to {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::log_to!($registry, $name, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Trace a warn-level message through a named logger.
#[macro_export]
macro_rules! warn_to {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::log_to!($registry, $name, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Trace an error-level message through a named logger.
#[macro_export]
macro_rules! error_to {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::log_to!($registry, $name, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Trace a fatal-level message through a named logger.
#[macro_export]
macro_rules! fatal_to {
    ($registry:expr, $name:expr, $($arg:tt)+) => {
        $crate::log_to!($registry, $name, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, LoggerRegistry};

    #[test]
    fn test_root_macros() {
        let registry = LoggerRegistry::new();
        log!(registry, LogLevel::Info, "plain {}", 1);
        debug!(registry, "debug {}", 2);
        info!(registry, "info");
        warn!(registry, "warn");
        error!(registry, "error");
        fatal!(registry, "fatal");
    }

    #[test]
    fn test_named_macros() {
        let registry = LoggerRegistry::new();
        registry.add_logger("mod_a", None);
        log_to!(registry, "mod_a", LogLevel::Warn, "value: {}", 42);
        debug_to!(registry, "mod_a", "debug");
        info_to!(registry, "mod_a", "info");
        warn_to!(registry, "mod_a", "warn");
        error_to!(registry, "mod_a", "error");
        fatal_to!(registry, "mod_a", "fatal");
    }

    #[test]
    fn test_macro_to_unknown_logger_is_dropped() {
        let registry = LoggerRegistry::new();
        info_to!(registry, "unregistered", "goes nowhere");
        assert!(!registry.is_registered("unregistered"));
    }
}
