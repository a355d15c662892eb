//! C-compatible resize metrics.

use growbuf_core::ResizeMetrics;

/// Snapshot of a buffer's reallocation counters, returned by
/// `growbuf_metrics`. Fixed-width `u64` fields for ABI portability.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowbufMetrics {
    /// Successful growth reallocations.
    pub grow_events: u64,
    /// Successful shrink reallocations.
    pub shrink_events: u64,
    /// Successful caller-requested reallocations.
    pub explicit_resizes: u64,
    /// Live elements copied across all successful reallocations.
    pub elements_copied: u64,
    /// Reallocations that failed to obtain storage.
    pub failed_resizes: u64,
    /// Shrinks abandoned after an allocation failure.
    pub skipped_shrinks: u64,
}

impl From<&ResizeMetrics> for GrowbufMetrics {
    fn from(m: &ResizeMetrics) -> Self {
        Self {
            grow_events: m.grow_events,
            shrink_events: m.shrink_events,
            explicit_resizes: m.explicit_resizes,
            elements_copied: m.elements_copied,
            failed_resizes: m.failed_resizes,
            skipped_shrinks: m.skipped_shrinks,
        }
    }
}
