//! Slot allocation for buffer storage.
//!
//! Every block a buffer stores its elements in comes from a
//! [`SlotAllocator`]. The buffer never touches the global allocator
//! directly, which keeps allocation failure observable (and injectable
//! in tests) instead of aborting the process.

use crate::error::AllocError;
use crate::Value;

/// Source of zero-filled storage blocks.
pub trait SlotAllocator {
    /// Allocate a block of exactly `slots` zeroed slots.
    ///
    /// The returned `Vec` must have `len() == slots`. On failure no
    /// block is returned and nothing the caller owns is touched.
    fn allocate(&mut self, slots: usize) -> Result<Vec<Value>, AllocError>;
}

impl<A: SlotAllocator + ?Sized> SlotAllocator for &mut A {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Value>, AllocError> {
        (**self).allocate(slots)
    }
}

/// Allocates from the global heap, reporting exhaustion as an error.
///
/// Uses `Vec::try_reserve_exact`, so a request the heap cannot satisfy
/// (or one whose byte size overflows `isize`) yields
/// [`AllocError::OutOfMemory`] rather than an abort.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAllocator;

impl SlotAllocator for SystemAllocator {
    fn allocate(&mut self, slots: usize) -> Result<Vec<Value>, AllocError> {
        let mut block = Vec::new();
        block
            .try_reserve_exact(slots)
            .map_err(|_| AllocError::OutOfMemory { slots })?;
        block.resize(slots, 0);
        Ok(block)
    }
}
