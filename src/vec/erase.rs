// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynIntArray};

impl DynIntArray {
    /// Removes and returns the element at `index`, shifting `[index+1, len)`
    /// one slot left.
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`. The capacity is
    /// unchanged. `O(len - index)`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<i32, Error> {
        let len = self.len;
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let out = self.buf[index];

        // Shift left: [index+1..len) -> [index..len-1)
        self.buf.copy_within(index + 1..len, index);

        self.len = len - 1;
        Ok(out)
    }
}
