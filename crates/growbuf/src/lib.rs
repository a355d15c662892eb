//! growbuf: a growable, contiguous buffer of `i32` values.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the growbuf sub-crates. For Rust users, adding `growbuf` as a single
//! dependency is sufficient; C users link `growbuf-ffi` instead.
//!
//! # Quick start
//!
//! ```rust
//! use growbuf::prelude::*;
//!
//! let mut buf = GrowableIntBuffer::new()?;
//! for v in [10, 20, 30, 40, 50] {
//!     buf.push(v)?;
//! }
//! // The fifth push found the buffer full and doubled it.
//! assert_eq!((buf.size(), buf.capacity()), (5, 8));
//!
//! assert_eq!(buf.pop()?, 50);
//! buf.set(0, -1)?;
//! assert_eq!(buf.as_slice(), &[-1, 20, 30, 40]);
//! assert_eq!(buf.get(4), Err(BufferError::IndexOutOfRange { index: 4, size: 4 }));
//!
//! buf.destroy();
//! # Ok::<(), BufferError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `growbuf-buffer` | `GrowableIntBuffer`, growth policy, null-tolerant accessors |
//! | [`types`] | `growbuf-core` | Errors, `BufferConfig`, `SlotAllocator`, `ResizeMetrics` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The buffer and its growth policy (`growbuf-buffer`).
pub use growbuf_buffer as buffer;

/// Errors, configuration, the allocator seam, and metrics (`growbuf-core`).
///
/// Implement [`types::SlotAllocator`] to control where buffer storage
/// comes from.
pub use growbuf_core as types;

/// Common imports for typical growbuf usage.
///
/// ```rust
/// use growbuf::prelude::*;
/// ```
pub mod prelude {
    pub use growbuf_buffer::GrowableIntBuffer;
    pub use growbuf_core::{
        AllocError, BufferConfig, BufferError, ResizeMetrics, SlotAllocator, SystemAllocator,
    };
}
