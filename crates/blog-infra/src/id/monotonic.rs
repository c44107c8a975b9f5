//! Time-derived id generator that never repeats within a process.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use blog_core::ports::IdGenerator;

/// Yields `max(now_millis, last + 1)`.
///
/// Ids track wall-clock milliseconds like a timestamp would, but two calls
/// within the same millisecond (or a clock step backwards) still produce
/// distinct, strictly increasing values.
pub struct MonotonicIdGenerator {
    last: AtomicI64,
}

impl MonotonicIdGenerator {
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Generator whose first id is strictly greater than `floor`.
    pub fn starting_after(floor: i64) -> Self {
        Self {
            last: AtomicI64::new(floor),
        }
    }
}

impl Default for MonotonicIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for MonotonicIdGenerator {
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(prev + 1)
    }
}
