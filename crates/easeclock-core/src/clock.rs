//! Time sources for timers
//!
//! Instants are milliseconds stored as `f64`. [`SystemClock`] reads wall-clock
//! time since the Unix epoch; [`ManualClock`] is advanced explicitly and is
//! what the tests drive timers with.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A source of "now" in milliseconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> f64 {
        chrono::Utc::now().timestamp_millis() as f64
    }
}

/// Manually driven clock
///
/// Clones share the same instant, so a test can keep a handle while the
/// timer owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start.to_bits())),
        }
    }

    pub fn set(&self, now: f64) {
        self.now.store(now.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, ms: f64) {
        self.set(self.now() + ms);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> f64 {
        f64::from_bits(self.now.load(Ordering::SeqCst))
    }
}
