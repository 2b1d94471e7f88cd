//! Sort entry points.
//!
//! `sort` is the provider contract: `void sort(int32_t *data, int count)`.
//! The buffer belongs to the caller and is sorted in place. Counts of 0 or
//! 1 are no-ops. A null `data` or a negative `count` is treated as an
//! empty buffer; beyond that no validation is performed, and a pointer
//! that does not cover `count` elements is undefined behavior.

use std::ffi::c_int;

use sortprov_core::{view, Algorithm, SortSlice};

use crate::status::SortStatus;

/// Sort `count` elements at `data` into non-decreasing order.
///
/// Order among equal elements is unspecified.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sort(data: *mut i32, count: c_int) {
    ffi_guard_or!((), {
        // SAFETY: data covers count elements per caller contract.
        let slice = unsafe { view::from_raw(data, count) };
        Algorithm::default().sort(slice);
    })
}

/// Sort `count` elements at `data`, keeping equal elements in their
/// original relative order.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sort_stable(data: *mut i32, count: c_int) {
    ffi_guard_or!((), {
        // SAFETY: data covers count elements per caller contract.
        let slice = unsafe { view::from_raw(data, count) };
        Algorithm::Stable.sort(slice);
    })
}

/// Sort the buffer described by a slice descriptor.
///
/// Same contract as [`sort`], with pointer and count passed as one value.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sort_slice(slice: SortSlice) {
    ffi_guard_or!((), {
        // SAFETY: slice describes a valid buffer per caller contract.
        let data = unsafe { slice.as_mut_slice() };
        Algorithm::default().sort(data);
    })
}

/// Sort `count` elements at `data` with the algorithm whose id is
/// `algorithm`.
///
/// Returns [`SortStatus::Ok`], [`SortStatus::UnknownAlgorithm`] if the id
/// is not recognised (the buffer is untouched), or
/// [`SortStatus::InvalidArgument`] if `data` is null while `count > 1`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn sortprov_sort_with(data: *mut i32, count: c_int, algorithm: i32) -> i32 {
    ffi_guard!({
        let algorithm = match Algorithm::try_from(algorithm) {
            Ok(a) => a,
            Err(e) => return SortStatus::from(&e) as i32,
        };
        if data.is_null() && count > 1 {
            return SortStatus::InvalidArgument as i32;
        }
        // SAFETY: data covers count elements per caller contract.
        let slice = unsafe { view::from_raw(data, count) };
        algorithm.sort(slice);
        SortStatus::Ok as i32
    })
}
