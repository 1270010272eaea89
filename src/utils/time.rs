//! Time sources for animation and effect lifetimes
//!
//! Effects are driven by millisecond timestamps rather than wall-clock waits, so
//! the same code runs against a monotonic clock in the terminal and a manually
//! advanced clock in tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Milliseconds since an arbitrary, per-clock origin
pub type Millis = u64;

/// Date format used in generated file headers
pub const HEADER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format used for log lines
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// A source of the current time in milliseconds
pub trait Clock: Send + Sync {
    fn now(&self) -> Millis;
}

/// Clock backed by `Instant`, counting from its creation
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Millis {
        duration_to_millis(self.origin.elapsed())
    }
}

/// Manually driven clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: Millis) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start)),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, now: Millis) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Move the clock forward by `millis`
    pub fn advance(&self, millis: Millis) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.load(Ordering::SeqCst)
    }
}

/// Convert a `Duration` to whole milliseconds, saturating at `u64::MAX`
pub fn duration_to_millis(duration: Duration) -> Millis {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
