// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynIntArray};

impl DynIntArray {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// - Returns [`Error::IndexOutOfRange`] if `index > len`.
    /// - Grows the buffer under the same rule as [`push`](Self::push).
    ///
    /// `O(len - index)`. Uses `copy_within` for overlap-safe shifting.
    #[inline]
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), Error> {
        let len = self.len;
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        let next = self.capacity_state().after_push()?;
        if next.capacity != self.capacity() {
            self.resize_buffer(next.capacity);
        }

        // Shift right: [index..len) -> [index+1..len+1)
        self.buf.copy_within(index..len, index + 1);
        self.buf[index] = value;

        self.len = next.len;
        Ok(())
    }
}
