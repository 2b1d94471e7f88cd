//! Shell sort over the Ciura gap sequence.

use crate::insertion::gapped;

/// Ciura's empirical gaps, extended past 701 by a factor of ~2.25.
///
/// Descending; the final pass (gap 1) is a plain insertion sort.
pub const CIURA_GAPS: [usize; 12] = [
    20622, 8855, 3802, 1633, 701, 301, 132, 57, 23, 10, 4, 1,
];

/// Sort `data` in place with shell sort.
///
/// Not stable. Gaps at or above the slice length are skipped.
pub fn shell(data: &mut [i32]) {
    shell_with_gaps(data, &CIURA_GAPS);
}

/// Run gapped insertion passes for each gap in `gaps`, in the given order.
///
/// Zero gaps and gaps at or above `data.len()` are skipped. The result is
/// only guaranteed sorted when the sequence ends in 1.
pub fn shell_with_gaps(data: &mut [i32], gaps: &[usize]) {
    for &gap in gaps {
        if gap > 0 && gap < data.len() {
            gapped(data, gap);
        }
    }
}
