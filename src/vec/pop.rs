// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynIntArray};

impl DynIntArray {
    /// Removes and returns the last element, or [`Error::Empty`].
    ///
    /// The capacity is unchanged.
    #[inline]
    pub fn pop(&mut self) -> Result<i32, Error> {
        if self.len == 0 {
            return Err(Error::Empty);
        }
        self.len -= 1;
        Ok(self.buf[self.len])
    }
}
