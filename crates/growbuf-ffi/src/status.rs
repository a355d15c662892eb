//! C-compatible status codes.
//!
//! [`GrowbufStatus`] is a `repr(i32)` enum covering every outcome of the
//! C API. Conversions from [`BufferError`] are provided.

use growbuf_core::BufferError;

/// C-compatible status code returned by FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowbufStatus {
    /// Success.
    Ok = 0,
    /// Handle is null, invalid, or was already destroyed.
    InvalidHandle = -1,
    /// Backing storage could not be allocated.
    AllocationFailed = -2,
    /// Requested capacity is below the live element count or the floor.
    InvalidCapacity = -3,
    /// Pop on a buffer with no live elements.
    EmptyBuffer = -4,
    /// Index at or past the live element count.
    IndexOutOfRange = -5,
    /// A required out-pointer is null.
    InvalidArgument = -6,
    /// Caller-provided buffer is too small.
    BufferTooSmall = -7,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -8,
    /// Buffer configuration rejected.
    ConfigError = -9,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&BufferError> for GrowbufStatus {
    fn from(e: &BufferError) -> Self {
        match e {
            BufferError::AllocationFailed(_) => GrowbufStatus::AllocationFailed,
            BufferError::InvalidCapacity { .. } => GrowbufStatus::InvalidCapacity,
            BufferError::EmptyBuffer => GrowbufStatus::EmptyBuffer,
            BufferError::IndexOutOfRange { .. } => GrowbufStatus::IndexOutOfRange,
            BufferError::InvalidConfig(_) => GrowbufStatus::ConfigError,
        }
    }
}

impl GrowbufStatus {
    /// `Ok` for `Ok(_)`, the mapped code for `Err`, as a raw `i32`.
    pub(crate) fn code<T>(result: &Result<T, BufferError>) -> i32 {
        match result {
            Ok(_) => GrowbufStatus::Ok as i32,
            Err(e) => GrowbufStatus::from(e) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growbuf_core::{AllocError, ConfigError};

    #[test]
    fn ok_is_zero_and_errors_are_negative() {
        assert_eq!(GrowbufStatus::Ok as i32, 0);
        for status in [
            GrowbufStatus::InvalidHandle,
            GrowbufStatus::AllocationFailed,
            GrowbufStatus::InvalidCapacity,
            GrowbufStatus::EmptyBuffer,
            GrowbufStatus::IndexOutOfRange,
            GrowbufStatus::InvalidArgument,
            GrowbufStatus::BufferTooSmall,
            GrowbufStatus::InternalError,
            GrowbufStatus::ConfigError,
            GrowbufStatus::Panicked,
        ] {
            assert!((status as i32) < 0, "{status:?} must be negative");
        }
    }

    #[test]
    fn buffer_error_to_status() {
        assert_eq!(
            GrowbufStatus::from(&BufferError::AllocationFailed(AllocError::OutOfMemory {
                slots: 8
            })),
            GrowbufStatus::AllocationFailed
        );
        assert_eq!(
            GrowbufStatus::from(&BufferError::InvalidCapacity {
                requested: 1,
                minimum: 4
            }),
            GrowbufStatus::InvalidCapacity
        );
        assert_eq!(
            GrowbufStatus::from(&BufferError::EmptyBuffer),
            GrowbufStatus::EmptyBuffer
        );
        assert_eq!(
            GrowbufStatus::from(&BufferError::IndexOutOfRange { index: 0, size: 0 }),
            GrowbufStatus::IndexOutOfRange
        );
        assert_eq!(
            GrowbufStatus::from(&BufferError::InvalidConfig(ConfigError::ZeroInitialCapacity)),
            GrowbufStatus::ConfigError
        );
    }

    #[test]
    fn code_of_result() {
        assert_eq!(GrowbufStatus::code(&Ok::<(), BufferError>(())), 0);
        assert_eq!(
            GrowbufStatus::code(&Err::<(), _>(BufferError::EmptyBuffer)),
            GrowbufStatus::EmptyBuffer as i32
        );
    }

    #[test]
    fn panicked_status_is_negative_128() {
        assert_eq!(GrowbufStatus::Panicked as i32, -128);
    }
}
