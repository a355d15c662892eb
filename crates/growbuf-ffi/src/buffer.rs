//! Buffer lifecycle and data operations over the C ABI.
//!
//! All buffers live in one global handle table behind a `Mutex`. The
//! lock is the external mutual exclusion the buffer itself does not
//! provide; each call holds it for the duration of one operation.

use std::ffi::c_char;
use std::sync::Mutex;

use growbuf_buffer::GrowableIntBuffer;
use growbuf_core::BufferConfig;

use crate::handle::HandleTable;
use crate::metrics::GrowbufMetrics;
use crate::status::GrowbufStatus;

/// The null handle. Never issued; destroying it is a no-op.
pub const GROWBUF_NULL_HANDLE: u64 = 0;

static BUFFERS: Mutex<HandleTable<GrowableIntBuffer>> = Mutex::new(HandleTable::new());

#[allow(unsafe_code)]
fn create_with(config: BufferConfig, handle_out: *mut u64) -> i32 {
    if handle_out.is_null() {
        return GrowbufStatus::InvalidArgument as i32;
    }
    let buffer = match GrowableIntBuffer::with_config(config) {
        Ok(b) => b,
        Err(e) => return GrowbufStatus::from(&e) as i32,
    };
    let handle = ffi_lock!(BUFFERS).insert(buffer);
    tracing::debug!(handle, "buffer created");
    // SAFETY: handle_out is non-null and valid per caller contract.
    unsafe { *handle_out = handle };
    GrowbufStatus::Ok as i32
}

/// Create an empty buffer with capacity 4.
///
/// On success writes the new handle to `handle_out` and returns `OK`.
/// `handle_out` must not be null.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_create(handle_out: *mut u64) -> i32 {
    ffi_guard!({ create_with(BufferConfig::default(), handle_out) })
}

/// Create an empty buffer whose initial capacity, and capacity floor,
/// is `initial_capacity`. Zero is rejected with `CONFIG_ERROR`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_create_with_capacity(
    initial_capacity: usize,
    handle_out: *mut u64,
) -> i32 {
    ffi_guard!({ create_with(BufferConfig::new(initial_capacity), handle_out) })
}

/// Destroy a buffer, releasing its storage.
///
/// The null handle is accepted as a no-op and returns `OK`. A handle
/// that was already destroyed returns `INVALID_HANDLE`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_destroy(handle: u64) -> i32 {
    ffi_guard!({
        if handle == GROWBUF_NULL_HANDLE {
            return GrowbufStatus::Ok as i32;
        }
        match ffi_lock!(BUFFERS).remove(handle) {
            Some(buffer) => {
                buffer.destroy();
                tracing::debug!(handle, "buffer destroyed");
                GrowbufStatus::Ok as i32
            }
            None => {
                tracing::warn!(handle, "destroy of stale or unknown handle");
                GrowbufStatus::InvalidHandle as i32
            }
        }
    })
}

/// Live element count. Returns 0 for the null handle or a stale one.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_size(handle: u64) -> usize {
    ffi_guard_or!(0, {
        BUFFERS
            .lock()
            .ok()
            .and_then(|table| table.get(handle).map(GrowableIntBuffer::size))
            .unwrap_or(0)
    })
}

/// Allocated capacity. Returns 0 for the null handle or a stale one.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_capacity(handle: u64) -> usize {
    ffi_guard_or!(0, {
        BUFFERS
            .lock()
            .ok()
            .and_then(|table| table.get(handle).map(GrowableIntBuffer::capacity))
            .unwrap_or(0)
    })
}

/// Append `value`. Returns `ALLOCATION_FAILED` if the buffer was full
/// and could not grow; the buffer is then unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_push(handle: u64, value: i32) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(BUFFERS);
        let buffer = match table.get_mut(handle) {
            Some(b) => b,
            None => return GrowbufStatus::InvalidHandle as i32,
        };
        GrowbufStatus::code(&buffer.push(value))
    })
}

/// Remove the last element and write it to `value_out`.
///
/// `value_out` may be null to discard the value. On `EMPTY_BUFFER`
/// nothing is written.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_pop(handle: u64, value_out: *mut i32) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(BUFFERS);
        let buffer = match table.get_mut(handle) {
            Some(b) => b,
            None => return GrowbufStatus::InvalidHandle as i32,
        };
        match buffer.pop() {
            Ok(value) => {
                if !value_out.is_null() {
                    // SAFETY: value_out is valid per caller contract.
                    unsafe { *value_out = value };
                }
                GrowbufStatus::Ok as i32
            }
            Err(e) => GrowbufStatus::from(&e) as i32,
        }
    })
}

/// Read the element at `index` into `value_out` (must not be null).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_get(handle: u64, index: usize, value_out: *mut i32) -> i32 {
    ffi_guard!({
        if value_out.is_null() {
            return GrowbufStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(BUFFERS);
        let buffer = match table.get(handle) {
            Some(b) => b,
            None => return GrowbufStatus::InvalidHandle as i32,
        };
        match buffer.get(index) {
            Ok(value) => {
                // SAFETY: value_out is non-null and valid per caller contract.
                unsafe { *value_out = value };
                GrowbufStatus::Ok as i32
            }
            Err(e) => GrowbufStatus::from(&e) as i32,
        }
    })
}

/// Overwrite the element at `index`. `index == size` is out of range.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_set(handle: u64, index: usize, value: i32) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(BUFFERS);
        let buffer = match table.get_mut(handle) {
            Some(b) => b,
            None => return GrowbufStatus::InvalidHandle as i32,
        };
        GrowbufStatus::code(&buffer.set(index, value))
    })
}

/// Reallocate to exactly `new_capacity` slots.
///
/// Returns `INVALID_CAPACITY` below the live count or the floor, and
/// `ALLOCATION_FAILED` if storage cannot be obtained. Either way the
/// buffer is unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_resize(handle: u64, new_capacity: usize) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(BUFFERS);
        let buffer = match table.get_mut(handle) {
            Some(b) => b,
            None => return GrowbufStatus::InvalidHandle as i32,
        };
        GrowbufStatus::code(&buffer.resize(new_capacity))
    })
}

/// Copy the buffer's reallocation counters into `out` (must not be null).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_metrics(handle: u64, out: *mut GrowbufMetrics) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return GrowbufStatus::InvalidArgument as i32;
        }
        let table = ffi_lock!(BUFFERS);
        let buffer = match table.get(handle) {
            Some(b) => b,
            None => return GrowbufStatus::InvalidHandle as i32,
        };
        // SAFETY: out is non-null and valid per caller contract.
        unsafe { *out = GrowbufMetrics::from(buffer.metrics()) };
        GrowbufStatus::Ok as i32
    })
}

/// Render `GrowableIntBuffer [size=N, cap=M]: [...]` as a NUL-terminated
/// string into `buf`.
///
/// The required length including the terminator is written to
/// `len_out` when it is not null. If `buf_len` is smaller than that,
/// returns `BUFFER_TOO_SMALL` without touching `buf`, so a call with
/// `buf = NULL, buf_len = 0` queries the size.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_render(
    handle: u64,
    buf: *mut c_char,
    buf_len: usize,
    len_out: *mut usize,
) -> i32 {
    ffi_guard!({
        let text = {
            let table = ffi_lock!(BUFFERS);
            match table.get(handle) {
                Some(b) => b.to_string(),
                None => return GrowbufStatus::InvalidHandle as i32,
            }
        };
        let required = text.len() + 1;
        if !len_out.is_null() {
            // SAFETY: len_out is valid per caller contract.
            unsafe { *len_out = required };
        }
        if buf_len < required {
            return GrowbufStatus::BufferTooSmall as i32;
        }
        if buf.is_null() {
            return GrowbufStatus::InvalidArgument as i32;
        }
        // SAFETY: buf points to at least buf_len >= required writable bytes.
        unsafe {
            std::ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), buf, text.len());
            *buf.add(text.len()) = 0;
        }
        GrowbufStatus::Ok as i32
    })
}

/// Number of buffers currently alive in the handle table.
///
/// Returns 0 if the table is unavailable.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn growbuf_live_buffers() -> usize {
    ffi_guard_or!(0, { BUFFERS.lock().map(|table| table.len()).unwrap_or(0) })
}
