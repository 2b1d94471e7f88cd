//! Heap sort: bottom-up heap construction, then repeated max extraction.

/// Sort `data` in place with heap sort.
///
/// Not stable. O(n log n) worst case, no allocation.
pub fn heap(data: &mut [i32]) {
    let len = data.len();
    if len < 2 {
        return;
    }
    for root in (0..len / 2).rev() {
        sift_down(data, root, len);
    }
    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

/// Restore the max-heap property for the subtree at `root` within `data[..end]`.
///
/// Children of `i` live at `2i + 1` and `2i + 2`.
fn sift_down(data: &mut [i32], mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let right = left + 1;
        let child = if right < end && data[right] > data[left] {
            right
        } else {
            left
        };
        if data[root] >= data[child] {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}
