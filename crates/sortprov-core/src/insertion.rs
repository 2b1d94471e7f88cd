//! Insertion sort and its gapped form.
//!
//! Elements are shifted rather than swapped: the element being inserted is
//! held aside while larger predecessors move up one gap, then written once.

use crate::error::SortError;

/// Sort `data` in place with straight insertion sort.
///
/// Stable, O(n^2) worst case, O(n) on already-sorted input.
pub fn insertion(data: &mut [i32]) {
    gapped(data, 1);
}

/// Insertion-sort every `gap`-strided subsequence of `data`.
///
/// After the call, `data[i] <= data[i + gap]` for every valid `i`. A gap of
/// 1 fully sorts the slice.
pub fn insertion_gap(data: &mut [i32], gap: usize) -> Result<(), SortError> {
    if gap == 0 {
        return Err(SortError::InvalidGap);
    }
    gapped(data, gap);
    Ok(())
}

/// Gapped insertion pass. `gap` must be non-zero.
pub(crate) fn gapped(data: &mut [i32], gap: usize) {
    debug_assert!(gap > 0);
    for i in gap..data.len() {
        let value = data[i];
        let mut j = i;
        while j >= gap && data[j - gap] > value {
            data[j] = data[j - gap];
            j -= gap;
        }
        data[j] = value;
    }
}
