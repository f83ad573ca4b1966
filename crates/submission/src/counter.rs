use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

/// Page-session waitlist count shown as social proof.
///
/// Starts at a seed, only ever goes up, and is never persisted. Anyone may
/// hold a handle and read it; only the waitlist controller increments it.
#[derive(Debug, Clone)]
pub struct WaitlistCounter(Arc<AtomicU64>);

impl WaitlistCounter {
    pub fn new(seed: u64) -> Self {
        Self(Arc::new(AtomicU64::new(seed)))
    }

    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    pub(crate) fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}
