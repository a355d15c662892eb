//! Error types for buffer operations.
//!
//! [`BufferError`] is the single error surface of the buffer API. Each
//! variant names one failure class; none of them leaves the buffer in a
//! partially mutated state.

use std::error::Error;
use std::fmt;

/// A backing block of the requested size could not be obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested slot count does not fit in the address space
    /// (e.g. doubling a capacity overflowed `usize`).
    CapacityOverflow {
        /// Capacity that was being grown from.
        from: usize,
    },
    /// The allocator refused a request for `slots` slots.
    OutOfMemory {
        /// Number of slots requested.
        slots: usize,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { from } => {
                write!(f, "capacity overflow while growing from {from} slots")
            }
            Self::OutOfMemory { slots } => {
                write!(f, "allocation of {slots} slots failed")
            }
        }
    }
}

impl Error for AllocError {}

/// Invalid [`BufferConfig`](crate::BufferConfig) values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial capacity (and therefore the capacity floor) is zero.
    ZeroInitialCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Backing storage could not be obtained, grown, or shrunk.
    /// Fatal to the triggering operation only.
    AllocationFailed(AllocError),
    /// An explicit resize asked for fewer slots than the buffer must keep.
    InvalidCapacity {
        /// The capacity the caller asked for.
        requested: usize,
        /// Smallest acceptable capacity: `max(size, floor)`.
        minimum: usize,
    },
    /// Removal requested on a buffer with no live elements.
    EmptyBuffer,
    /// Read or write addressed at or past the live element count.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Live element count at the time of the call.
        size: usize,
    },
    /// The buffer configuration was rejected before any allocation.
    InvalidConfig(ConfigError),
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed(e) => write!(f, "allocation failed: {e}"),
            Self::InvalidCapacity { requested, minimum } => {
                write!(
                    f,
                    "invalid capacity: requested {requested} slots, minimum {minimum}"
                )
            }
            Self::EmptyBuffer => write!(f, "buffer is empty"),
            Self::IndexOutOfRange { index, size } => {
                write!(f, "index {index} out of range for size {size}")
            }
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for BufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AllocationFailed(e) => Some(e),
            Self::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for BufferError {
    fn from(e: AllocError) -> Self {
        Self::AllocationFailed(e)
    }
}

impl From<ConfigError> for BufferError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfig(e)
    }
}
