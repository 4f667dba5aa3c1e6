// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{capacity::check_capacity, error::Error, vec::DynIntArray};

// Alloc imports
use alloc::vec;

impl DynIntArray {
    /// Ensures `capacity() >= n`, keeping every element at its index.
    ///
    /// No-op if `n <= capacity()`. Returns [`Error::InvalidArgument`] if
    /// `n > MAX_CAPACITY`.
    #[inline]
    pub fn reserve(&mut self, n: usize) -> Result<(), Error> {
        let n = check_capacity(n)?;
        if n > self.capacity() {
            self.resize_buffer(n);
        }
        Ok(())
    }

    /// Drops all spare capacity so that `capacity() == len()`.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() != self.len {
            self.resize_buffer(self.len);
        }
    }

    /// Reallocates the backing buffer to exactly `n` elements.
    ///
    /// - `n < len`: the array is truncated to its first `n` elements and
    ///   `len == capacity == n` afterwards.
    /// - otherwise the first `len` elements are copied over and the rest of
    ///   the new buffer is zeroed.
    ///
    /// Callers validate `n` against `MAX_CAPACITY` first.
    pub(crate) fn resize_buffer(&mut self, n: usize) {
        log::debug!(
            "reallocating DynIntArray buffer: capacity {} -> {} (len {})",
            self.capacity(),
            n,
            self.len
        );
        let keep = self.len.min(n);
        let mut buf = vec![0; n].into_boxed_slice();
        buf[..keep].copy_from_slice(&self.buf[..keep]);
        self.buf = buf;
        self.len = keep;
    }
}
