use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Advisory "claim in progress" indicator.
///
/// Counts in-flight attempts. It never blocks a second attempt from starting.
#[derive(Clone, Debug, Default)]
pub struct BusyIndicator {
    in_flight: Arc<AtomicUsize>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Button label a host UI would render for the current state.
    pub fn label(&self) -> &'static str {
        if self.is_busy() {
            "Claiming..."
        } else {
            "Claim an NFT"
        }
    }

    pub(crate) fn enter(&self) -> BusyGuard {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        BusyGuard {
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

/// Releases one in-flight slot on drop, whatever way the attempt ends.
#[must_use]
pub(crate) struct BusyGuard {
    in_flight: Arc<AtomicUsize>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}
