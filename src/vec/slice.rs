// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynIntArray;

// Alloc imports
use alloc::vec::Vec;

impl DynIntArray {
    /// Returns the logical prefix as a shared slice (`&self.buf[..len]`).
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.buf[..self.len]
    }

    /// Returns the logical prefix as a mutable slice (`&mut self.buf[..len]`).
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        let len = self.len;
        &mut self.buf[..len]
    }

    /// Copies the logical elements into a new `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<i32> {
        self.as_slice().to_vec()
    }
}
