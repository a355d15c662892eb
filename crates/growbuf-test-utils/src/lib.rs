//! Test utilities for growbuf development.
//!
//! Provides [`SlotAllocator`](growbuf_core::SlotAllocator) fixtures that
//! make allocation failure deterministic and allocation traffic
//! observable. See [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{FailMode, FailingAllocator, RecordingAllocator};

/// The values 10, 20, ..., `10 * n`.
pub fn tens(n: usize) -> Vec<i32> {
    (1..=n as i32).map(|i| i * 10).collect()
}
