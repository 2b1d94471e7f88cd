//! C-compatible status codes for the status-returning entry points.
//!
//! The core `sort` contract returns nothing; only the extended entry points
//! such as `sortprov_sort_with` report a [`SortStatus`].

use sortprov_core::SortError;

/// Status code returned by status-returning FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortStatus {
    /// Success.
    Ok = 0,
    /// Algorithm id is not recognised.
    UnknownAlgorithm = -1,
    /// An argument is null, out of range, or otherwise invalid.
    InvalidArgument = -2,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&SortError> for SortStatus {
    fn from(e: &SortError) -> Self {
        match e {
            SortError::UnknownAlgorithm { .. } | SortError::UnknownAlgorithmId { .. } => {
                SortStatus::UnknownAlgorithm
            }
            SortError::InvalidGap
            | SortError::LengthOverflow { .. }
            | SortError::NotSorted { .. }
            | SortError::NotPermutation
            | SortError::InvalidConfig { .. } => SortStatus::InvalidArgument,
        }
    }
}
