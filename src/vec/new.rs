// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{capacity::check_capacity, error::Error, vec::DynIntArray};

// Alloc imports
use alloc::vec;

impl DynIntArray {
    /// Constructs an empty array with capacity 0. Does not allocate.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: vec![].into_boxed_slice(),
            len: 0,
        }
    }

    /// Constructs an empty array with room for `capacity` elements.
    ///
    /// Returns [`Error::InvalidArgument`] if `capacity > MAX_CAPACITY`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Self::new_with(capacity, 0)
    }

    /// Constructs an empty array whose backing buffer is filled with `fill`.
    ///
    /// Note: the initial **length** is `0`. The fill only determines what the
    /// spare capacity holds; every visible element is written by a push or
    /// insert.
    #[inline]
    pub fn new_with(capacity: usize, fill: i32) -> Result<Self, Error> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            buf: vec![fill; capacity].into_boxed_slice(),
            len: 0,
        })
    }
}

impl Default for DynIntArray {
    fn default() -> Self {
        Self::new()
    }
}
