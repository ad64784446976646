//! Scoped delivery-mode guard

use super::registry::LoggerRegistry;
use std::sync::Arc;

/// Scoped lifecycle token for a registry's delivery mode.
///
/// Construction installs the requested mode; dropping the guard (on any
/// exit path, including unwind) drains every logger via
/// [`LoggerRegistry::flush_all`], so messages enqueued inside the scope are
/// delivered, best-effort, before the scope ends.
///
/// ```no_run
/// use std::sync::Arc;
/// use sulog::{LogGuard, LogLevel, LoggerRegistry, ROOT_LOGGER};
///
/// let registry = LoggerRegistry::new();
/// let _guard = LogGuard::new(Arc::clone(&registry), true);
/// registry.add_console_logger(ROOT_LOGGER, LogLevel::Debug);
/// sulog::info!(registry, "service starting");
/// // guard drops here: queues drain before the scope ends
/// ```
pub struct LogGuard {
    registry: Arc<LoggerRegistry>,
}

impl LogGuard {
    pub fn new(registry: Arc<LoggerRegistry>, async_mode: bool) -> Self {
        registry.set_async_mode(async_mode);
        Self { registry }
    }
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        self.registry.flush_all();
    }
}
