//! Buffer views: non-owning `(pointer, count)` descriptors of `i32` runs.
//!
//! This is the only module in the crate that may contain `unsafe` code.
//! Raw parts are turned into a `&mut [i32]` here and nowhere else; every
//! algorithm downstream works on the checked slice.

use std::ptr;

use crate::error::SortError;

/// C-compatible slice descriptor: address of the first element plus count.
///
/// Ownership stays with whoever allocated the buffer. A `SortSlice` is
/// never retained past the call it was passed to.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSlice {
    /// Address of the first element. May be null when `len <= 0`.
    pub ptr: *mut i32,
    /// Number of elements.
    pub len: i32,
}

// Layout is part of the ABI.
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::size_of::<SortSlice>() == 16);
#[cfg(target_pointer_width = "64")]
const _: () = assert!(std::mem::align_of::<SortSlice>() == 8);

impl SortSlice {
    /// An empty view.
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null_mut(),
            len: 0,
        }
    }

    /// Describe a Rust slice.
    ///
    /// Fails if the slice holds more than `i32::MAX` elements.
    pub fn from_slice(data: &mut [i32]) -> Result<Self, SortError> {
        let len = i32::try_from(data.len())
            .map_err(|_| SortError::LengthOverflow { len: data.len() })?;
        Ok(Self {
            ptr: data.as_mut_ptr(),
            len,
        })
    }

    /// Element count, with negative counts clamped to zero.
    pub fn len(&self) -> usize {
        usize::try_from(self.len).unwrap_or(0)
    }

    /// Whether the view describes no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0 || self.ptr.is_null()
    }

    /// Borrow the described elements as a mutable slice.
    ///
    /// # Safety
    ///
    /// Same contract as [`from_raw`].
    #[allow(unsafe_code)]
    pub unsafe fn as_mut_slice<'a>(self) -> &'a mut [i32] {
        // SAFETY: forwarded to the caller.
        unsafe { from_raw(self.ptr, self.len) }
    }
}

impl Default for SortSlice {
    fn default() -> Self {
        Self::empty()
    }
}

/// Build a mutable slice from a raw pointer and a signed element count.
///
/// A count of zero or less, or a null pointer, yields an empty slice and
/// the pointer is never dereferenced.
///
/// # Safety
///
/// When `count > 0` and `ptr` is non-null, `ptr` must be valid for reads
/// and writes of `count` consecutive, properly aligned `i32` values, and no
/// other reference to that memory may be live for `'a`.
#[allow(unsafe_code)]
pub unsafe fn from_raw<'a>(ptr: *mut i32, count: i32) -> &'a mut [i32] {
    match usize::try_from(count) {
        Ok(len) if len > 0 && !ptr.is_null() => {
            // SAFETY: ptr points to `len` valid elements per caller contract.
            unsafe { std::slice::from_raw_parts_mut(ptr, len) }
        }
        _ => &mut [],
    }
}
