//! Core types and traits for the growbuf workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the buffer, the FFI layer, and the test
//! fixtures: error types, buffer configuration, the slot allocator
//! seam, and resize metrics.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod error;
pub mod metrics;

pub use alloc::{SlotAllocator, SystemAllocator};
pub use config::BufferConfig;
pub use error::{AllocError, BufferError, ConfigError};
pub use metrics::{ResizeKind, ResizeMetrics};

/// Element type stored by every buffer in the workspace.
pub type Value = i32;
