//! LSD radix sort over the four bytes of an `i32`.

const RADIX: usize = 256;

/// Sort `data` in place with a least-significant-digit radix sort.
///
/// Four counting passes of one byte each, ping-ponging through a scratch
/// buffer of `data.len()` elements. The sign bit is flipped on the last pass
/// so negative values order before positive ones. Stable; O(n) time.
pub fn radix(data: &mut [i32]) {
    if data.len() < 2 {
        return;
    }
    let mut scratch = vec![0i32; data.len()];
    for pass in 0..4 {
        if pass % 2 == 0 {
            scatter(data, &mut scratch, pass);
        } else {
            scatter(&scratch, data, pass);
        }
    }
}

/// Byte `pass` of `x` as a bucket index, sign bit flipped on the top byte.
#[inline]
fn digit(x: i32, pass: u32) -> usize {
    let key = (x as u32) ^ 0x8000_0000;
    ((key >> (pass * 8)) & 0xFF) as usize
}

/// Counting-sort `src` into `dst` by byte `pass`.
fn scatter(src: &[i32], dst: &mut [i32], pass: u32) {
    let mut offsets = [0usize; RADIX];
    for &x in src {
        offsets[digit(x, pass)] += 1;
    }
    let mut next = 0;
    for slot in offsets.iter_mut() {
        let count = *slot;
        *slot = next;
        next += count;
    }
    for &x in src {
        let d = digit(x, pass);
        dst[offsets[d]] = x;
        offsets[d] += 1;
    }
}
