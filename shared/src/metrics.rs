use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct StoreMetrics {
    pub intents_received: AtomicU64,
    pub intents_dropped: AtomicU64,
    pub fetches_started: AtomicU64,
    pub fetches_succeeded: AtomicU64,
    pub fetches_failed: AtomicU64,
    // Error events emitted while nobody was subscribed
    pub events_undelivered: AtomicU64,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            intents_received: self.intents_received.load(Ordering::Relaxed),
            intents_dropped: self.intents_dropped.load(Ordering::Relaxed),
            fetches_started: self.fetches_started.load(Ordering::Relaxed),
            fetches_succeeded: self.fetches_succeeded.load(Ordering::Relaxed),
            fetches_failed: self.fetches_failed.load(Ordering::Relaxed),
            events_undelivered: self.events_undelivered.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub intents_received: u64,
    pub intents_dropped: u64,
    pub fetches_started: u64,
    pub fetches_succeeded: u64,
    pub fetches_failed: u64,
    pub events_undelivered: u64,
}

impl MetricsSnapshot {
    #[must_use]
    pub const fn fetches_in_flight(&self) -> u64 {
        self.fetches_started
            .saturating_sub(self.fetches_succeeded)
            .saturating_sub(self.fetches_failed)
    }
}
