//! C FFI bindings for growbuf.
//!
//! Buffers live in a process-wide, generation-checked handle table.
//! C callers hold `u64` handles; `0` is the null handle and is never
//! issued. Every entry point returns a [`GrowbufStatus`] code (or a
//! plain value for the null-tolerant accessors) and never unwinds
//! across the boundary.
//!
//! This is the only crate in the workspace that contains `unsafe`
//! code, confined to out-pointer writes in `#[allow(unsafe_code)]`
//! functions.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, returning `$fallback` if it panics.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(_) => {
                ::tracing::error!("panic caught at FFI boundary");
                $fallback
            }
        }
    };
}

/// `ffi_guard_or!` with `GrowbufStatus::Panicked` as the fallback.
///
/// `return` inside the body returns from the guarded closure, not the
/// enclosing function, so early status returns work as expected.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::GrowbufStatus::Panicked as i32, $body)
    };
}

/// Lock a mutex, returning `GrowbufStatus::InternalError` if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $crate::status::GrowbufStatus::InternalError as i32,
        }
    };
}

pub mod buffer;
mod handle;
pub mod metrics;
pub mod status;

pub use buffer::GROWBUF_NULL_HANDLE;
pub use metrics::GrowbufMetrics;
pub use status::GrowbufStatus;
