// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{capacity::next_capacity, error::Error, vec::DynIntArray};

impl DynIntArray {
    /// Appends every element of `src`.
    ///
    /// Reallocates at most once: if the new length reaches the capacity, the
    /// buffer grows to `new_len * GROWTH_FACTOR`.
    ///
    /// Returns [`Error::InvalidArgument`] (and leaves the array unchanged) if
    /// the result would exceed `MAX_CAPACITY`.
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[i32]) -> Result<(), Error> {
        if src.is_empty() {
            return Ok(());
        }
        let len = self.len;
        let new_len = len.checked_add(src.len()).ok_or(Error::InvalidArgument {
            capacity: usize::MAX,
        })?;
        let capacity = next_capacity(new_len, self.capacity())?;
        if capacity != self.capacity() {
            self.resize_buffer(capacity);
        }
        self.buf[len..new_len].copy_from_slice(src);
        self.len = new_len;
        Ok(())
    }
}

/// # Panics
///
/// Panics if the new length exceeds `MAX_CAPACITY`, like `Vec` does.
impl Extend<i32> for DynIntArray {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            if let Err(e) = self.push(item) {
                panic!("DynIntArray::extend: {e}");
            }
        }
    }
}

impl<'a> Extend<&'a i32> for DynIntArray {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
