//! Quicksort: median-of-three pivot, three-way partition, insertion cutoff.

use crate::insertion;

/// Slices at or below this length are finished with insertion sort.
pub const INSERTION_CUTOFF: usize = 32;

/// Sort `data` in place with quicksort.
///
/// Not stable. Runs of keys equal to the pivot are excluded from both
/// recursive halves, so inputs with few distinct values stay fast. Only the
/// smaller half recurses; the larger is handled by the loop, so stack depth
/// is O(log n).
pub fn quick(mut data: &mut [i32]) {
    while data.len() > INSERTION_CUTOFF {
        let (lt, gt) = partition(data);
        let (low, rest) = std::mem::take(&mut data).split_at_mut(lt);
        let high = &mut rest[gt - lt..];
        if low.len() < high.len() {
            quick(low);
            data = high;
        } else {
            quick(high);
            data = low;
        }
    }
    insertion::insertion(data);
}

/// Median of the first, middle, and last elements.
fn median_of_three(data: &[i32]) -> i32 {
    let (a, b, c) = (data[0], data[data.len() / 2], data[data.len() - 1]);
    a.max(b).min(a.min(b).max(c))
}

/// Three-way partition around the median-of-three pivot.
///
/// Returns `(lt, gt)` such that `data[..lt] < pivot`,
/// `data[lt..gt] == pivot`, and `data[gt..] > pivot`.
fn partition(data: &mut [i32]) -> (usize, usize) {
    let pivot = median_of_three(data);
    let (mut lt, mut i, mut gt) = (0, 0, data.len());
    while i < gt {
        if data[i] < pivot {
            data.swap(lt, i);
            lt += 1;
            i += 1;
        } else if data[i] > pivot {
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}
