//! Growable contiguous buffer of `i32` values.
//!
//! [`GrowableIntBuffer`] owns one block of storage and two counters,
//! `size` (live elements) and `capacity` (allocated slots). Storage
//! doubles when a push finds the buffer full and halves when a pop
//! leaves it less than a quarter full, never dropping below the
//! configured floor (4 by default).
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──create──▶ Live ──destroy──▶ Destroyed
//!                            │ ▲
//!                            └─┘ push / pop / get / set / resize
//! ```
//!
//! `destroy` consumes the buffer, so use after teardown is a compile
//! error rather than a runtime hazard.
//!
//! # Failure isolation
//!
//! Every reallocation builds the replacement block completely before
//! swapping it in. A failed allocation leaves size, capacity, and all
//! element values exactly as they were. The only swallowed failure is
//! a shrink during `pop`, which degrades to keeping the larger block.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod growth;
mod render;

pub use buffer::{capacity, size, GrowableIntBuffer};
pub use growbuf_core::{BufferConfig, BufferError, ResizeMetrics};
