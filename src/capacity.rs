// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity bookkeeping for [`DynIntArray`](crate::DynIntArray).
//!
//! The growth policy is a pure function of `(len, capacity)` so it can be
//! reasoned about (and tested) without allocating anything:
//!
//! - the logical length is advanced first;
//! - if the new length reaches or passes the capacity, the capacity becomes
//!   `len * GROWTH_FACTOR` (clamped to [`MAX_CAPACITY`]);
//! - otherwise the capacity is left alone.
//!
//! Starting from capacity 5, pushes therefore grow the buffer to 10 at the
//! fifth element, 20 at the tenth, 40 at the twentieth. Starting from
//! capacity 0, the first push grows it to 2.

// Crate imports
use crate::error::Error;

/// Multiplier applied to the length when the capacity must increase.
pub const GROWTH_FACTOR: usize = 2;

/// Largest number of elements a backing buffer may hold.
///
/// Allocations are limited to `isize::MAX` bytes.
pub const MAX_CAPACITY: usize = isize::MAX as usize / core::mem::size_of::<i32>();

/// Snapshot of the `{len, capacity}` pair that drives reallocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityState {
    /// Logical element count.
    pub len: usize,
    /// Allocated length of the backing buffer.
    pub capacity: usize,
}

impl CapacityState {
    /// Creates a state record. Does not check `len <= capacity`.
    #[inline]
    pub const fn new(len: usize, capacity: usize) -> Self {
        Self { len, capacity }
    }

    /// The constant growth multiplier ([`GROWTH_FACTOR`]).
    #[inline]
    pub const fn growth_factor(&self) -> usize {
        GROWTH_FACTOR
    }

    /// State after one more element is added at any position.
    ///
    /// Returns [`Error::InvalidArgument`] if the new length would exceed
    /// [`MAX_CAPACITY`].
    #[inline]
    pub fn after_push(self) -> Result<Self, Error> {
        let len = self
            .len
            .checked_add(1)
            .ok_or(Error::InvalidArgument { capacity: usize::MAX })?;
        let capacity = next_capacity(len, self.capacity)?;
        Ok(Self { len, capacity })
    }

    /// Returns `true` if [`after_push`](Self::after_push) would reallocate.
    #[inline]
    pub fn grows_on_push(&self) -> bool {
        self.len.saturating_add(1) >= self.capacity
    }
}

/// Capacity required once the logical length has become `len`.
///
/// - `len < capacity` → `capacity` (no reallocation);
/// - otherwise `len * GROWTH_FACTOR`, clamped to [`MAX_CAPACITY`];
/// - `len > MAX_CAPACITY` → [`Error::InvalidArgument`].
#[inline]
pub fn next_capacity(len: usize, capacity: usize) -> Result<usize, Error> {
    if len > MAX_CAPACITY {
        return Err(Error::InvalidArgument { capacity: len });
    }
    if len < capacity {
        return Ok(capacity);
    }
    Ok(len.saturating_mul(GROWTH_FACTOR).min(MAX_CAPACITY))
}

/// Validates an explicitly requested capacity.
#[inline]
pub(crate) fn check_capacity(capacity: usize) -> Result<usize, Error> {
    if capacity > MAX_CAPACITY {
        Err(Error::InvalidArgument { capacity })
    } else {
        Ok(capacity)
    }
}
