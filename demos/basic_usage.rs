//! Walkthrough of the registry, guard and trace macros.
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use sulog::prelude::*;

fn main() {
    // Construct the registry explicitly and share it. A handler-less
    // _ROOT_ logger exists from this point on.
    let registry = LoggerRegistry::new();

    // The guard installs the delivery mode for its whole scope: true for
    // asynchronous (messages queue and a background worker per logger does
    // the writing), false for inline delivery on the calling thread. When
    // the guard drops, every queue is drained.
    let _guard = LogGuard::new(Arc::clone(&registry), true);

    // _ROOT_ does nothing until a sink is attached.
    registry.add_console_logger(ROOT_LOGGER, LogLevel::Debug);

    // Separate modules can keep separate loggers. The file's parent
    // directory must already exist; the sink will not create it.
    registry.add_file_logger("mate_b", "./teammate_b.log", LogLevel::Info, false);
    // A named logger is constructed once; this second call only attaches
    // another sink to the same "mate_b" logger.
    registry.add_console_logger("mate_b", LogLevel::Debug);

    // The plain macros target _ROOT_.
    sulog::debug!(registry, "I am: {}", 18);
    sulog::info!(registry, "I am: {}", 18);
    sulog::warn!(registry, "I am: {}", 18);
    sulog::error!(registry, "I am: {}", 18);
    sulog::fatal!(registry, "I am: {}", 18);

    // The _to macros pick a logger by name. Note the Info threshold on the
    // file sink: the debug line reaches only the console sink.
    sulog::debug_to!(registry, "mate_b", "Hello world");
    sulog::info_to!(registry, "mate_b", "Hello world");

    // Guard drops here and blocks until both loggers are idle.
}
