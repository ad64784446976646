//! Handler trait for log output destinations

use super::{error::Result, log_message::LogMessage};

/// An output sink owned by exactly one logger.
///
/// `write` receives every message pushed to the owning logger; the handler
/// itself decides, via [`LogMessage::should_emit`] against its configured
/// minimum level, whether to render and emit. Side effects stay confined to
/// the handler's own sink.
pub trait LogHandler: Send + Sync {
    fn write(&mut self, msg: &LogMessage) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
