//! Named delivery unit: one queue, one worker, an ordered handler list

use super::{
    handler::LogHandler,
    log_level::LogLevel,
    log_message::LogMessage,
    stats::LoggerStats,
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default timeout for joining a logger's delivery worker on shutdown.
///
/// Used when the logger is dropped without an explicit `shutdown()` call.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Control message carried by a logger's queue.
///
/// Shutdown travels through the same ordered channel as deliveries, so the
/// worker drains everything enqueued before it and the loop is a plain
/// match over a closed set of variants.
pub(crate) enum Command {
    Deliver(LogMessage),
    Shutdown,
}

/// A named, independently ordered delivery unit.
///
/// Owns an unbounded FIFO queue, exactly one background delivery worker
/// (spawned once, terminated once by an explicit shutdown command), and an
/// ordered list of handlers. Fan-out order is attachment order.
pub struct Logger {
    name: String,
    handlers: Arc<RwLock<Vec<Box<dyn LogHandler>>>>,
    sender: Sender<Command>,
    /// Messages queued or currently being fanned out; drives `is_idle`.
    in_flight: Arc<AtomicUsize>,
    stats: Arc<LoggerStats>,
    /// Process-wide delivery mode, shared with the owning registry.
    async_mode: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Logger {
    /// Spawn a logger and its delivery worker.
    ///
    /// The returned handle owns the worker's join token; the worker runs
    /// until [`Logger::shutdown`] (or Drop) sends the shutdown command.
    pub(crate) fn spawn(name: impl Into<String>, async_mode: Arc<AtomicBool>) -> Self {
        let (sender, receiver) = unbounded();
        let handlers: Arc<RwLock<Vec<Box<dyn LogHandler>>>> = Arc::new(RwLock::new(Vec::new()));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let stats = Arc::new(LoggerStats::new());

        let handlers_clone = Arc::clone(&handlers);
        let in_flight_clone = Arc::clone(&in_flight);
        let stats_clone = Arc::clone(&stats);
        let worker = thread::spawn(move || {
            Self::delivery_loop(receiver, handlers_clone, in_flight_clone, stats_clone);
        });

        Self {
            name: name.into(),
            handlers,
            sender,
            in_flight,
            stats,
            async_mode,
            worker: Some(worker),
        }
    }

    /// Worker body: block on the queue, fan out deliveries in FIFO order,
    /// stop on the shutdown command (or a disconnected channel).
    fn delivery_loop(
        receiver: Receiver<Command>,
        handlers: Arc<RwLock<Vec<Box<dyn LogHandler>>>>,
        in_flight: Arc<AtomicUsize>,
        stats: Arc<LoggerStats>,
    ) {
        loop {
            match receiver.recv() {
                Ok(Command::Deliver(msg)) => {
                    Self::fan_out(&mut handlers.write(), &msg, &stats);
                    in_flight.fetch_sub(1, Ordering::AcqRel);
                }
                Ok(Command::Shutdown) | Err(_) => break,
            }
        }
    }

    /// Deliver one message to every handler, sequentially, in attachment
    /// order. A failing or panicking handler is reported on stderr and
    /// does not stop delivery to the remaining handlers.
    fn fan_out(handlers: &mut [Box<dyn LogHandler>], msg: &LogMessage, stats: &LoggerStats) {
        let mut has_error = false;
        for handler in handlers.iter_mut() {
            let outcome =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler.write(msg)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[SULOG ERROR] handler '{}' failed: {}", handler.name(), e);
                    has_error = true;
                }
                Err(_) => {
                    eprintln!(
                        "[SULOG ERROR] handler '{}' panicked; remaining handlers continue",
                        handler.name()
                    );
                    has_error = true;
                }
            }
        }
        if has_error {
            stats.record_failed();
        } else {
            stats.record_delivered();
        }
    }

    /// Append a handler. Registration happens at setup time; handlers
    /// attached after delivery has started only see subsequent messages.
    pub fn add_handler(&self, handler: Box<dyn LogHandler>) {
        self.handlers.write().push(handler);
    }

    /// Single entry point for emitting a message through this logger.
    ///
    /// In async mode the message is enqueued and the call returns
    /// immediately (the queue is unbounded; producers never block). In sync
    /// mode fan-out runs inline on the caller's thread before returning.
    pub fn push(&self, level: LogLevel, file: &str, function: &str, line: u32, text: impl Into<String>) {
        let msg = LogMessage::new(level, file, function, line, text);
        if self.async_mode.load(Ordering::Relaxed) {
            self.in_flight.fetch_add(1, Ordering::AcqRel);
            if self.sender.send(Command::Deliver(msg)).is_err() {
                // Worker already stopped; nothing can deliver this message.
                self.in_flight.fetch_sub(1, Ordering::AcqRel);
            }
        } else {
            Self::fan_out(&mut self.handlers.write(), &msg, &self.stats);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True iff no message is queued or mid-delivery.
    ///
    /// Advisory only: a concurrent push can make the answer stale before
    /// the caller observes it. Flush polling is its sole intended use.
    pub fn is_idle(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) == 0
    }

    pub fn stats(&self) -> Arc<LoggerStats> {
        Arc::clone(&self.stats)
    }

    /// Flush every attached handler.
    pub fn flush(&self) {
        for handler in self.handlers.write().iter_mut() {
            if let Err(e) = handler.flush() {
                eprintln!("[SULOG ERROR] handler '{}' flush failed: {}", handler.name(), e);
            }
        }
    }

    /// Stop the delivery worker, draining everything already queued.
    ///
    /// The shutdown command goes through the FIFO queue, so every message
    /// enqueued before this call is fanned out first. Returns `false` if
    /// the worker did not stop within `timeout` or panicked.
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        let Some(handle) = self.worker.take() else {
            return true;
        };
        let _ = self.sender.send(Command::Shutdown);

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if handle.join().is_err() {
                    eprintln!(
                        "[SULOG ERROR] delivery worker for '{}' panicked during shutdown",
                        self.name
                    );
                    return false;
                }
                break;
            }
            if start.elapsed() >= timeout {
                eprintln!(
                    "[SULOG WARN] delivery worker for '{}' did not stop within {:?}; \
                     queued messages may be lost",
                    self.name, timeout
                );
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }

        self.flush();
        true
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}
