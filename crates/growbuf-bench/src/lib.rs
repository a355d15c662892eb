//! Workload profiles for benchmarking growbuf.
//!
//! Each profile is a deterministic operation sequence that can be
//! replayed against any buffer with [`apply`]:
//!
//! - [`push_run`]: `n` pushes from empty (pure growth)
//! - [`sawtooth`]: repeated fill-then-drain cycles (growth and shrink)
//! - [`boundary_thrash`]: alternating push/pop right at a growth boundary

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growbuf_buffer::GrowableIntBuffer;
use growbuf_core::{BufferError, SlotAllocator};

/// One step of a workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Append the value.
    Push(i32),
    /// Remove the last element.
    Pop,
}

/// `n` pushes of `0..n`.
pub fn push_run(n: usize) -> Vec<Op> {
    (0..n as i32).map(Op::Push).collect()
}

/// `cycles` rounds of `depth` pushes followed by `depth` pops.
pub fn sawtooth(cycles: usize, depth: usize) -> Vec<Op> {
    let mut ops = Vec::with_capacity(cycles * depth * 2);
    for _ in 0..cycles {
        ops.extend((0..depth as i32).map(Op::Push));
        ops.extend(std::iter::repeat(Op::Pop).take(depth));
    }
    ops
}

/// Fill to exactly `capacity`, then alternate push/pop `rounds` times.
///
/// The first push of each round crosses the growth boundary; with a
/// quarter-full shrink threshold the following pop must not undo it.
pub fn boundary_thrash(capacity: usize, rounds: usize) -> Vec<Op> {
    let mut ops = push_run(capacity);
    for i in 0..rounds {
        ops.push(Op::Push(i as i32));
        ops.push(Op::Pop);
    }
    ops
}

/// Replay `ops` against `buffer`, stopping at the first error.
///
/// Pops on an empty buffer are errors, so well-formed profiles never
/// pop more than they pushed.
pub fn apply<A: SlotAllocator>(
    buffer: &mut GrowableIntBuffer<A>,
    ops: &[Op],
) -> Result<(), BufferError> {
    for op in ops {
        match *op {
            Op::Push(v) => buffer.push(v)?,
            Op::Pop => {
                buffer.pop()?;
            }
        }
    }
    Ok(())
}
