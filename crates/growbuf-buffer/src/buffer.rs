//! The growable integer buffer.

use growbuf_core::{
    AllocError, BufferConfig, BufferError, ResizeKind, ResizeMetrics, SlotAllocator,
    SystemAllocator, Value,
};

use crate::growth;

/// A contiguous, index-addressable, growable buffer of `i32`.
///
/// Invariants, held before and after every public method:
///
/// - `size <= capacity`
/// - `capacity >= floor` (the configured initial capacity)
/// - storage holds exactly `capacity` slots, the first `size` of which
///   are the live elements in order.
///
/// The buffer is exclusively owned and not internally synchronised.
/// Share it across threads behind a lock.
pub struct GrowableIntBuffer<A: SlotAllocator = SystemAllocator> {
    /// Backing block. `storage.len()` is the capacity.
    storage: Vec<Value>,
    /// Number of live elements at the front of `storage`.
    size: usize,
    /// Capacity floor; also the initial capacity.
    floor: usize,
    allocator: A,
    metrics: ResizeMetrics,
}

impl GrowableIntBuffer<SystemAllocator> {
    /// Create an empty buffer with capacity 4 on the global heap.
    ///
    /// Returns [`BufferError::AllocationFailed`] if the initial block
    /// cannot be obtained.
    pub fn new() -> Result<Self, BufferError> {
        Self::with_config(BufferConfig::default())
    }

    /// Create an empty buffer with the given config on the global heap.
    pub fn with_config(config: BufferConfig) -> Result<Self, BufferError> {
        Self::with_allocator(config, SystemAllocator)
    }
}

impl<A: SlotAllocator> GrowableIntBuffer<A> {
    /// Create an empty buffer whose storage comes from `allocator`.
    ///
    /// The config is validated before anything is allocated. On failure
    /// the allocator is dropped and nothing is leaked.
    pub fn with_allocator(config: BufferConfig, mut allocator: A) -> Result<Self, BufferError> {
        config.validate()?;
        let storage = allocator.allocate(config.initial_capacity)?;
        debug_assert_eq!(storage.len(), config.initial_capacity);
        Ok(Self {
            storage,
            size: 0,
            floor: config.initial_capacity,
            allocator,
            metrics: ResizeMetrics::default(),
        })
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The capacity floor this buffer was created with.
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// The live elements, in order.
    pub fn as_slice(&self) -> &[Value] {
        &self.storage[..self.size]
    }

    /// Iterate over the live elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.as_slice().iter()
    }

    /// Reallocation counters since creation.
    pub fn metrics(&self) -> &ResizeMetrics {
        &self.metrics
    }

    /// The allocator backing this buffer.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Mutable access to the allocator, e.g. to re-arm a test fixture.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Reallocate storage to exactly `new_capacity` slots.
    ///
    /// Live elements are preserved in order. Fails with
    /// [`BufferError::InvalidCapacity`] if `new_capacity` is below the
    /// live element count or the capacity floor, and with
    /// [`BufferError::AllocationFailed`] if the new block cannot be
    /// obtained. On failure nothing changes.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), BufferError> {
        let minimum = self.size.max(self.floor);
        if new_capacity < minimum {
            return Err(BufferError::InvalidCapacity {
                requested: new_capacity,
                minimum,
            });
        }
        self.reallocate(new_capacity, ResizeKind::Explicit)
    }

    /// Append `value` as the new last element.
    ///
    /// A full buffer doubles its capacity first. If that growth fails
    /// the push fails with [`BufferError::AllocationFailed`] and the
    /// buffer is unchanged.
    pub fn push(&mut self, value: Value) -> Result<(), BufferError> {
        if self.size == self.capacity() {
            let from = self.capacity();
            let target = match growth::grow_target(from) {
                Some(t) => t,
                None => {
                    self.metrics.record_failure(ResizeKind::Grow);
                    return Err(AllocError::CapacityOverflow { from }.into());
                }
            };
            self.reallocate(target, ResizeKind::Grow)?;
        }
        self.storage[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// Returns [`BufferError::EmptyBuffer`] if there is nothing to pop.
    /// Afterwards, a buffer left non-empty and under a quarter full
    /// halves its capacity (not below the floor). A failed shrink is
    /// logged and skipped; the pop still succeeds.
    pub fn pop(&mut self) -> Result<Value, BufferError> {
        if self.size == 0 {
            return Err(BufferError::EmptyBuffer);
        }
        self.size -= 1;
        let value = self.storage[self.size];

        if let Some(shrink_to) = growth::shrink_target(self.size, self.capacity(), self.floor) {
            if let Err(e) = self.reallocate(shrink_to, ResizeKind::Shrink) {
                tracing::warn!(
                    size = self.size,
                    capacity = self.capacity(),
                    shrink_to,
                    error = %e,
                    "shrink skipped, keeping current capacity"
                );
            }
        }
        Ok(value)
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<Value, BufferError> {
        self.check_index(index)?;
        Ok(self.storage[index])
    }

    /// Overwrite the element at `index`.
    ///
    /// Only live slots are addressable: `index == size` is out of range,
    /// not an append.
    pub fn set(&mut self, index: usize, value: Value) -> Result<(), BufferError> {
        self.check_index(index)?;
        self.storage[index] = value;
        Ok(())
    }

    /// Release the storage block.
    ///
    /// Takes the buffer by value; it cannot be used or destroyed again.
    pub fn destroy(self) {
        tracing::trace!(
            size = self.size,
            capacity = self.capacity(),
            "buffer destroyed"
        );
    }

    fn check_index(&self, index: usize) -> Result<(), BufferError> {
        if index >= self.size {
            return Err(BufferError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Replace storage with a fresh block of `new_capacity` slots.
    ///
    /// The new block is filled before the swap, so an allocation failure
    /// leaves the old block in place. Callers ensure `new_capacity >= size`.
    fn reallocate(&mut self, new_capacity: usize, kind: ResizeKind) -> Result<(), BufferError> {
        debug_assert!(new_capacity >= self.size);
        let mut block = match self.allocator.allocate(new_capacity) {
            Ok(b) => b,
            Err(e) => {
                self.metrics.record_failure(kind);
                return Err(e.into());
            }
        };
        debug_assert_eq!(block.len(), new_capacity);

        let live = self.size;
        block[..live].copy_from_slice(&self.storage[..live]);
        let from = self.capacity();
        self.storage = block;
        self.metrics.record_success(kind, live);

        tracing::debug!(?kind, from, to = new_capacity, copied = live, "buffer resized");
        Ok(())
    }
}

impl<A: SlotAllocator> std::fmt::Debug for GrowableIntBuffer<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrowableIntBuffer")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("floor", &self.floor)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<'a, A: SlotAllocator> IntoIterator for &'a GrowableIntBuffer<A> {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Live element count of an optional buffer; 0 when absent.
pub fn size<A: SlotAllocator>(buffer: Option<&GrowableIntBuffer<A>>) -> usize {
    buffer.map_or(0, GrowableIntBuffer::size)
}

/// Allocated capacity of an optional buffer; 0 when absent.
pub fn capacity<A: SlotAllocator>(buffer: Option<&GrowableIntBuffer<A>>) -> usize {
    buffer.map_or(0, GrowableIntBuffer::capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use growbuf_core::ConfigError;
    use growbuf_test_utils::{tens, FailMode, FailingAllocator, RecordingAllocator};

    fn filled(values: &[Value]) -> GrowableIntBuffer {
        let mut buf = GrowableIntBuffer::new().unwrap();
        for &v in values {
            buf.push(v).unwrap();
        }
        buf
    }

    fn failing() -> GrowableIntBuffer<FailingAllocator> {
        GrowableIntBuffer::with_allocator(BufferConfig::default(), FailingAllocator::healthy())
            .unwrap()
    }

    // ── create ──────────────────────────────────────────────────

    #[test]
    fn new_buffer_is_empty_with_capacity_four() {
        let buf = GrowableIntBuffer::new().unwrap();
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.capacity(), 4);
        assert!(buf.is_empty());
        assert!(buf.as_slice().is_empty());
    }

    #[test]
    fn create_reports_allocation_failure() {
        let result =
            GrowableIntBuffer::with_allocator(BufferConfig::default(), FailingAllocator::new(FailMode::Always));
        assert!(matches!(
            result,
            Err(BufferError::AllocationFailed(AllocError::OutOfMemory { slots: 4 }))
        ));
    }

    #[test]
    fn invalid_config_rejected_before_allocating() {
        let mut alloc = RecordingAllocator::new();
        let result = GrowableIntBuffer::with_allocator(BufferConfig::new(0), &mut alloc);
        assert_eq!(
            result.unwrap_err(),
            BufferError::InvalidConfig(ConfigError::ZeroInitialCapacity)
        );
        assert_eq!(alloc.count(), 0);
    }

    #[test]
    fn custom_floor() {
        let buf = GrowableIntBuffer::with_config(BufferConfig::new(10)).unwrap();
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.floor(), 10);
    }

    // ── push ────────────────────────────────────────────────────

    #[test]
    fn push_within_capacity_does_not_reallocate() {
        let buf = filled(&[1, 2, 3, 4]);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.metrics().reallocations(), 0);
    }

    #[test]
    fn push_into_full_buffer_doubles() {
        let mut buf = filled(&[1, 2, 3, 4]);
        buf.push(5).unwrap();
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.get(4), Ok(5));
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn failed_growth_leaves_buffer_unchanged() {
        let mut buf = failing();
        for v in [1, 2, 3, 4] {
            buf.push(v).unwrap();
        }
        buf.allocator_mut().set_mode(FailMode::Always);

        let err = buf.push(5).unwrap_err();
        assert!(matches!(err, BufferError::AllocationFailed(_)));
        assert_eq!(buf.size(), 4);
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(buf.metrics().failed_resizes, 1);
    }

    #[test]
    fn push_succeeds_after_allocator_recovers() {
        let mut buf = failing();
        for v in [1, 2, 3, 4] {
            buf.push(v).unwrap();
        }
        buf.allocator_mut().set_mode(FailMode::Always);
        assert!(buf.push(5).is_err());
        buf.allocator_mut().set_mode(FailMode::Never);
        buf.push(5).unwrap();
        assert_eq!(buf.as_slice(), &[1, 2, 3, 4, 5]);
    }

    // ── pop ─────────────────────────────────────────────────────

    #[test]
    fn pop_returns_last_in_reverse_order() {
        let mut buf = filled(&[1, 2, 3]);
        assert_eq!(buf.pop(), Ok(3));
        assert_eq!(buf.pop(), Ok(2));
        assert_eq!(buf.pop(), Ok(1));
        assert!(buf.is_empty());
    }

    #[test]
    fn pop_empty_is_error_and_changes_nothing() {
        let mut buf = GrowableIntBuffer::new().unwrap();
        assert_eq!(buf.pop(), Err(BufferError::EmptyBuffer));
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn pop_below_quarter_halves_capacity() {
        // 17 pushes: capacity 32.
        let mut buf = filled(&tens(17));
        assert_eq!(buf.capacity(), 32);
        // Pop to size 8: 8 < 32/4 is false, no shrink.
        for _ in 0..9 {
            buf.pop().unwrap();
        }
        assert_eq!(buf.size(), 8);
        assert_eq!(buf.capacity(), 32);
        // Pop to size 7: 7 < 8, shrink to 16.
        buf.pop().unwrap();
        assert_eq!(buf.size(), 7);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.as_slice(), &tens(7)[..]);
        assert_eq!(buf.metrics().shrink_events, 1);
    }

    #[test]
    fn pop_to_empty_never_goes_below_floor() {
        let mut buf = filled(&tens(40));
        while buf.pop().is_ok() {
            assert!(buf.capacity() >= 4);
        }
        assert_eq!(buf.size(), 0);
        assert!(buf.capacity() >= 4);
    }

    #[test]
    fn shrink_stops_at_floor() {
        let mut buf = filled(&tens(9)); // capacity 16
        for _ in 0..6 {
            buf.pop().unwrap();
        }
        // size 3 < 16 / 4 -> shrink to 8
        assert_eq!(buf.capacity(), 8);
        buf.pop().unwrap();
        // size 2 is not < 8 / 4
        assert_eq!(buf.capacity(), 8);
        buf.pop().unwrap();
        // size 1 < 2 -> shrink to max(4, 4)
        assert_eq!(buf.capacity(), 4);
        buf.pop().unwrap();
        assert_eq!(buf.size(), 0);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn failed_shrink_is_not_fatal() {
        let mut buf = failing();
        for v in tens(9) {
            buf.push(v).unwrap();
        }
        assert_eq!(buf.capacity(), 16);
        buf.allocator_mut().set_mode(FailMode::Always);

        for expected in [90, 80, 70, 60, 50, 40] {
            assert_eq!(buf.pop(), Ok(expected));
        }
        // size 3 < 16/4 would have shrunk; the failure was swallowed.
        assert_eq!(buf.size(), 3);
        assert_eq!(buf.capacity(), 16);
        assert_eq!(buf.as_slice(), &[10, 20, 30]);
        assert_eq!(buf.metrics().skipped_shrinks, 1);
        assert_eq!(buf.metrics().shrink_events, 0);
    }

    // ── get / set ───────────────────────────────────────────────

    #[test]
    fn get_checks_against_size_not_capacity() {
        let buf = filled(&[7]);
        assert_eq!(buf.get(0), Ok(7));
        assert_eq!(
            buf.get(1),
            Err(BufferError::IndexOutOfRange { index: 1, size: 1 })
        );
        assert!(buf.get(3).is_err());
    }

    #[test]
    fn set_overwrites_only_target() {
        let mut buf = filled(&[1, 2, 3]);
        buf.set(1, 99).unwrap();
        assert_eq!(buf.as_slice(), &[1, 99, 3]);
    }

    #[test]
    fn set_at_size_is_not_an_append() {
        let mut buf = filled(&[1, 2]);
        assert_eq!(
            buf.set(2, 3),
            Err(BufferError::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(buf.size(), 2);
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn reads_never_change_capacity() {
        let mut buf = filled(&tens(5));
        let before = *buf.metrics();
        for i in 0..10 {
            let _ = buf.get(i);
        }
        let _ = buf.size();
        let _ = buf.capacity();
        let _ = buf.set(100, 0);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(*buf.metrics(), before);
    }

    // ── resize ──────────────────────────────────────────────────

    #[test]
    fn resize_preserves_elements() {
        let mut buf = filled(&[1, 2, 3]);
        buf.resize(100).unwrap();
        assert_eq!(buf.capacity(), 100);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
        buf.resize(4).unwrap();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.as_slice(), &[1, 2, 3]);
        assert_eq!(buf.metrics().explicit_resizes, 2);
    }

    #[test]
    fn resize_below_size_rejected() {
        let mut buf = filled(&tens(6));
        assert_eq!(
            buf.resize(5),
            Err(BufferError::InvalidCapacity {
                requested: 5,
                minimum: 6
            })
        );
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.as_slice(), &tens(6)[..]);
    }

    #[test]
    fn resize_below_floor_rejected() {
        let mut buf = filled(&[1]);
        assert_eq!(
            buf.resize(2),
            Err(BufferError::InvalidCapacity {
                requested: 2,
                minimum: 4
            })
        );
        assert_eq!(buf.capacity(), 4);
    }

    #[test]
    fn resize_to_exact_size() {
        let mut buf = filled(&tens(6));
        buf.resize(6).unwrap();
        assert_eq!(buf.capacity(), 6);
        // Full again: next push doubles from 6.
        buf.push(70).unwrap();
        assert_eq!(buf.capacity(), 12);
    }

    #[test]
    fn failed_resize_changes_nothing() {
        let mut buf = failing();
        for v in tens(5) {
            buf.push(v).unwrap();
        }
        buf.allocator_mut().set_mode(FailMode::Always);
        assert!(matches!(
            buf.resize(64),
            Err(BufferError::AllocationFailed(AllocError::OutOfMemory { slots: 64 }))
        ));
        assert_eq!(buf.size(), 5);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.as_slice(), &tens(5)[..]);
    }

    // ── accessors / destroy ─────────────────────────────────────

    #[test]
    fn absent_buffer_accessors_return_zero() {
        assert_eq!(size::<SystemAllocator>(None), 0);
        assert_eq!(capacity::<SystemAllocator>(None), 0);
        let buf = filled(&[1, 2, 3, 4, 5]);
        assert_eq!(size(Some(&buf)), 5);
        assert_eq!(capacity(Some(&buf)), 8);
    }

    #[test]
    fn destroy_consumes() {
        let buf = filled(&[1, 2, 3]);
        buf.destroy();
    }

    #[test]
    fn iteration_yields_live_elements() {
        let buf = filled(&[3, 1, 2]);
        let collected: Vec<Value> = buf.iter().copied().collect();
        assert_eq!(collected, vec![3, 1, 2]);
        let sum: Value = (&buf).into_iter().sum();
        assert_eq!(sum, 6);
    }

    #[test]
    fn debug_shows_live_elements_only() {
        let buf = filled(&[5, 6]);
        let dbg = format!("{buf:?}");
        assert!(dbg.contains("size: 2"));
        assert!(dbg.contains("capacity: 4"));
        assert!(dbg.contains("elements: [5, 6]"));
    }
}
