//! Output verification: ordering and permutation checks.

use crate::error::SortError;

/// Whether every element is `<=` its successor.
pub fn is_non_decreasing(data: &[i32]) -> bool {
    first_descent(data).is_none()
}

/// Whether `a` and `b` hold the same multiset of values.
pub fn is_permutation_of(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Check that `sorted` is a non-decreasing permutation of `original`.
pub fn check_sorted(original: &[i32], sorted: &[i32]) -> Result<(), SortError> {
    if let Some(index) = first_descent(sorted) {
        return Err(SortError::NotSorted { index });
    }
    if !is_permutation_of(original, sorted) {
        return Err(SortError::NotPermutation);
    }
    Ok(())
}

fn first_descent(data: &[i32]) -> Option<usize> {
    data.windows(2).position(|w| w[0] > w[1])
}
