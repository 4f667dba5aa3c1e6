// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `DynIntArray`.
//!
//! These errors represent capacity, bounds and emptiness conditions.
//! They are `Copy` and implement `core::error::Error`.

// External imports - thiserror
use thiserror::Error as ThisError;

/// Errors returned by operations on [`DynIntArray`](crate::DynIntArray).
///
/// Every operation checks its preconditions before touching the container,
/// so an `Err` always leaves the array exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// A requested capacity is larger than [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    #[error("invalid capacity {capacity}: exceeds the maximum of {max}", max = crate::MAX_CAPACITY)]
    InvalidArgument { capacity: usize },
    /// An index or position was outside the current logical bounds.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The operation needs at least one element.
    #[error("the array is empty")]
    Empty,
    /// `reduce` was called on an empty array without an initial value.
    #[error("cannot reduce an empty array without an initial value")]
    EmptyReduce,
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::IndexOutOfRange { index: 4, len: 2 });
        assert_eq!(s, "index 4 out of range for length 2");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::Empty.to_string(), "the array is empty");
        assert!(Error::EmptyReduce.to_string().contains("initial value"));
        let msg = Error::InvalidArgument { capacity: usize::MAX }.to_string();
        assert!(msg.contains("exceeds the maximum"), "msg: {msg}");
    }
}
