//! Core algorithms and types for the sortprov sort provider.
//!
//! Every algorithm here operates on a borrowed `&mut [i32]` and sorts it in
//! place into non-decreasing order. The C ABI in `sortprov-ffi` is a thin
//! shell around this crate: it turns raw `(pointer, count)` pairs into
//! slices via [`view`] and dispatches through [`Algorithm`].
//!
//! Only [`view`] contains `unsafe` code; it is the single place raw parts
//! become a slice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod quick;
pub mod radix;
pub mod shell;
pub mod verify;
pub mod view;

pub use algorithm::Algorithm;
pub use config::ReportConfig;
pub use error::SortError;
pub use view::SortSlice;

/// Sort `data` in place with the default algorithm.
///
/// Equivalent to `Algorithm::default().sort(data)`. Order among equal
/// elements is unspecified.
#[inline]
pub fn sort(data: &mut [i32]) {
    Algorithm::default().sort(data);
}

/// Sort `data` in place, preserving the relative order of equal elements.
#[inline]
pub fn sort_stable(data: &mut [i32]) {
    Algorithm::Stable.sort(data);
}
