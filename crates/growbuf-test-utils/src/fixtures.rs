//! Reusable allocator fixtures.
//!
//! - [`FailingAllocator`] — fails requests according to a switchable [`FailMode`].
//! - [`RecordingAllocator`] — succeeds and logs every requested slot count.

use growbuf_core::{AllocError, SlotAllocator, SystemAllocator, Value};

/// When a [`FailingAllocator`] refuses a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailMode {
    /// Every request succeeds.
    Never,
    /// Every request fails.
    Always,
    /// The next `n` requests succeed, every later one fails.
    After(usize),
    /// Requests for more than `n` slots fail.
    Above(usize),
    /// Requests for fewer than `n` slots fail (forces shrink failures).
    Below(usize),
}

/// Fails deterministically according to its [`FailMode`].
///
/// The mode can be changed after the allocator has been handed to a
/// buffer (through the buffer's `allocator_mut()`), so a test can build
/// state with a healthy allocator and then arm the failure.
#[derive(Debug)]
pub struct FailingAllocator {
    mode: FailMode,
    calls: usize,
    failures: usize,
}

impl FailingAllocator {
    pub fn new(mode: FailMode) -> Self {
        Self {
            mode,
            calls: 0,
            failures: 0,
        }
    }

    /// An allocator that succeeds until re-armed.
    pub fn healthy() -> Self {
        Self::new(FailMode::Never)
    }

    /// Switch the failure mode. `After(n)` counts from this call.
    pub fn set_mode(&mut self, mode: FailMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> FailMode {
        self.mode
    }

    /// How many times `allocate()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// How many of those calls were refused.
    pub fn failures(&self) -> usize {
        self.failures
    }

    fn refuses(&mut self, slots: usize) -> bool {
        match self.mode {
            FailMode::Never => false,
            FailMode::Always => true,
            FailMode::After(0) => true,
            FailMode::After(n) => {
                self.mode = FailMode::After(n - 1);
                false
            }
            FailMode::Above(limit) => slots > limit,
            FailMode::Below(limit) => slots < limit,
        }
    }
}

impl Default for FailingAllocator {
    fn default() -> Self {
        Self::healthy()
    }
}

impl SlotAllocator for FailingAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Value>, AllocError> {
        self.calls += 1;
        if self.refuses(slots) {
            self.failures += 1;
            return Err(AllocError::OutOfMemory { slots });
        }
        SystemAllocator.allocate(slots)
    }
}

/// Succeeds like [`SystemAllocator`] and records every request.
#[derive(Debug, Default)]
pub struct RecordingAllocator {
    requests: Vec<usize>,
}

impl RecordingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot counts requested so far, in call order.
    pub fn requests(&self) -> &[usize] {
        &self.requests
    }

    /// Number of requests seen.
    pub fn count(&self) -> usize {
        self.requests.len()
    }
}

impl SlotAllocator for RecordingAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Value>, AllocError> {
        self.requests.push(slots);
        SystemAllocator.allocate(slots)
    }
}
