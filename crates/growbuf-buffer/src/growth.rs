//! Capacity growth and shrink policy.
//!
//! Pure functions; the buffer applies their results.
//!
//! - Growth doubles, so `n` pushes from empty copy fewer than `2n` elements.
//! - A shrink leaves the buffer at least half full, so the next grow is
//!   at least `capacity / 2` pushes away.

/// Multiplier applied to capacity when a push finds the buffer full.
pub const GROWTH_FACTOR: usize = 2;

/// A pop shrinks when `size < capacity / SHRINK_THRESHOLD_DIVISOR`.
pub const SHRINK_THRESHOLD_DIVISOR: usize = 4;

/// A shrink divides capacity by this (before applying the floor).
pub const SHRINK_DIVISOR: usize = 2;

/// Capacity after growing a full buffer, or `None` on `usize` overflow.
pub fn grow_target(capacity: usize) -> Option<usize> {
    capacity.checked_mul(GROWTH_FACTOR)
}

/// Capacity to shrink to after a pop left `size` live elements.
///
/// Returns `Some(max(capacity / 2, floor))` when `size > 0` and
/// `size < capacity / 4`, and the result is actually smaller than
/// `capacity`. Popping to empty never shrinks.
pub fn shrink_target(size: usize, capacity: usize, floor: usize) -> Option<usize> {
    if size == 0 || size >= capacity / SHRINK_THRESHOLD_DIVISOR {
        return None;
    }
    let target = (capacity / SHRINK_DIVISOR).max(floor);
    (target < capacity).then_some(target)
}
