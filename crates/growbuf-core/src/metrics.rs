//! Reallocation counters for a single buffer.
//!
//! [`ResizeMetrics`] records every storage replacement a buffer performs,
//! so callers (and tests) can check that growth stays amortized O(1)
//! per push and that shrinking behaves as configured.

/// What triggered a storage reallocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeKind {
    /// Capacity doubled by a push into a full buffer.
    Grow,
    /// Capacity halved by a pop that left the buffer under a quarter full.
    Shrink,
    /// Caller-requested resize.
    Explicit,
}

/// Cumulative reallocation counters.
///
/// All counters start at zero when the buffer is created and only
/// increase. Read-only operations never touch them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeMetrics {
    /// Number of successful growth reallocations.
    pub grow_events: u64,
    /// Number of successful shrink reallocations.
    pub shrink_events: u64,
    /// Number of successful caller-requested reallocations.
    pub explicit_resizes: u64,
    /// Total live elements copied across all successful reallocations.
    pub elements_copied: u64,
    /// Number of reallocations that failed to obtain storage.
    pub failed_resizes: u64,
    /// Shrinks abandoned after an allocation failure (pop still succeeded).
    pub skipped_shrinks: u64,
}

impl ResizeMetrics {
    /// Total successful reallocations of any kind.
    pub fn reallocations(&self) -> u64 {
        self.grow_events + self.shrink_events + self.explicit_resizes
    }

    /// Record a successful reallocation that copied `copied` elements.
    pub fn record_success(&mut self, kind: ResizeKind, copied: usize) {
        match kind {
            ResizeKind::Grow => self.grow_events += 1,
            ResizeKind::Shrink => self.shrink_events += 1,
            ResizeKind::Explicit => self.explicit_resizes += 1,
        }
        self.elements_copied += copied as u64;
    }

    /// Record a reallocation whose storage request failed.
    pub fn record_failure(&mut self, kind: ResizeKind) {
        self.failed_resizes += 1;
        if kind == ResizeKind::Shrink {
            self.skipped_shrinks += 1;
        }
    }
}
