//! Algorithm ids and names across the C boundary.

use std::ffi::{c_char, CStr};

use sortprov_core::Algorithm;

/// Static NUL-terminated name for an algorithm.
pub(crate) fn c_name(algorithm: Algorithm) -> &'static CStr {
    match algorithm {
        Algorithm::Unstable => c"unstable",
        Algorithm::Stable => c"stable",
        Algorithm::Insertion => c"insertion",
        Algorithm::Shell => c"shell",
        Algorithm::Heap => c"heap",
        Algorithm::Quick => c"quick",
        Algorithm::Radix => c"radix",
    }
}

/// Name of the algorithm with the given id, or null for an unknown id.
///
/// The returned string is static; the caller must not free it.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sortprov_algorithm_name(algorithm: i32) -> *const c_char {
    ffi_guard_or!(std::ptr::null(), {
        match Algorithm::try_from(algorithm) {
            Ok(a) => c_name(a).as_ptr(),
            Err(_) => std::ptr::null(),
        }
    })
}

/// Number of algorithms; valid ids are `0..sortprov_algorithm_count()`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sortprov_algorithm_count() -> i32 {
    Algorithm::ALL.len() as i32
}
