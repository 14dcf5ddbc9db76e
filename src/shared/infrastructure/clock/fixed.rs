use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::clock::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Manually driven clock for tests and local replays.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn new(now: EpochMillis) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn advance_millis(&self, delta: i64) {
        self.now.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> EpochMillis {
        self.now.load(Ordering::SeqCst)
    }
}
