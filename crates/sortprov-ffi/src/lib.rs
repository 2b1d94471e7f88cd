//! C ABI for the sortprov sort provider.
//!
//! Host runtimes load this crate as a shared library and call [`sort`] with
//! a pointer to their own `int32_t` buffer and an element count. The buffer
//! is sorted in place; nothing is allocated, retained, or freed.
//!
//! Every entry point runs inside a panic guard so that no Rust panic ever
//! unwinds into foreign frames. This crate denies `unsafe_code` and opts
//! in per function where raw pointers cross the boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::any::Any;
use std::cell::RefCell;
use std::ffi::c_char;

/// Run `$body` under `catch_unwind`, returning `$fallback` if it panics.
///
/// The panic message is recorded for `sortprov_last_panic_message`.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| $body)) {
            Ok(value) => value,
            Err(payload) => {
                $crate::record_panic(payload.as_ref());
                $fallback
            }
        }
    };
}

/// `ffi_guard_or!` for status-returning entry points.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::SortStatus::Panicked as i32, $body)
    };
}

pub mod algorithm;
pub mod sort;
pub mod status;

pub use sort::{sort, sort_slice, sort_stable, sortprov_sort_with};
pub use sortprov_core::SortSlice;
pub use status::SortStatus;

/// ABI version of this library. Bumped on any breaking change to an
/// exported signature, struct layout, or status value.
pub const SORTPROV_ABI_VERSION: u32 = 1;

thread_local! {
    /// Message of the most recent panic caught on this thread.
    static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Store a caught panic payload for later retrieval and log it.
pub(crate) fn record_panic(payload: &(dyn Any + Send)) {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    log::error!("panic caught at FFI boundary: {message}");
    LAST_PANIC.with(|cell| *cell.borrow_mut() = message);
}

/// Return the ABI version this library was built with.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sortprov_abi_version() -> u32 {
    SORTPROV_ABI_VERSION
}

/// Copy the last panic message caught on this thread into `buf`.
///
/// Returns the full message length in bytes, excluding the terminator. If
/// `buf` is null or `cap` is zero nothing is written, so a caller can query
/// the length first. Otherwise up to `cap - 1` bytes are copied and the
/// output is always NUL-terminated. Returns 0 if no panic has been caught.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sortprov_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| {
        let message = cell.borrow();
        let bytes = message.as_bytes();
        if !buf.is_null() && cap > 0 {
            let copy_len = bytes.len().min(cap - 1);
            // SAFETY: buf points to cap valid bytes per caller contract.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, copy_len);
                *buf.add(copy_len) = 0;
            }
        }
        i32::try_from(bytes.len()).unwrap_or(i32::MAX)
    })
}
