//! Per-logger delivery counters
//!
//! The queue is unbounded, so unlike bounded designs there is no drop or
//! overflow accounting; a message either reaches every sink of its logger
//! or at least one sink reported a write failure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one logger's delivery outcomes.
///
/// # Example
///
/// ```
/// use sulog::LoggerStats;
///
/// let stats = LoggerStats::new();
/// stats.record_delivered();
/// assert_eq!(stats.delivered(), 1);
/// assert_eq!(stats.failed(), 0);
/// ```
#[derive(Debug, Default)]
pub struct LoggerStats {
    /// Messages fanned out with every handler write succeeding
    delivered: AtomicU64,

    /// Messages for which at least one handler write failed
    failed: AtomicU64,
}

impl LoggerStats {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = LoggerStats::new();
        assert_eq!(stats.delivered(), 0);
        assert_eq!(stats.failed(), 0);
    }

    #[test]
    fn test_recording() {
        let stats = LoggerStats::new();
        for _ in 0..3 {
            stats.record_delivered();
        }
        stats.record_failed();
        assert_eq!(stats.delivered(), 3);
        assert_eq!(stats.failed(), 1);
    }
}
