// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::DynIntArray;

// Alloc imports
use alloc::vec::Vec;

/// Builds an exact-length array (`capacity == len`) from a slice.
impl From<&[i32]> for DynIntArray {
    fn from(src: &[i32]) -> Self {
        Self {
            buf: src.into(),
            len: src.len(),
        }
    }
}

/// Takes over the initialized part of the `Vec`; `capacity == len`.
impl From<Vec<i32>> for DynIntArray {
    fn from(src: Vec<i32>) -> Self {
        let len = src.len();
        Self {
            buf: src.into_boxed_slice(),
            len,
        }
    }
}

impl<const N: usize> From<[i32; N]> for DynIntArray {
    fn from(src: [i32; N]) -> Self {
        Self::from(&src[..])
    }
}

impl<const N: usize> From<&[i32; N]> for DynIntArray {
    fn from(src: &[i32; N]) -> Self {
        Self::from(&src[..])
    }
}

impl From<DynIntArray> for Vec<i32> {
    fn from(v: DynIntArray) -> Self {
        let mut out = Vec::from(v.buf);
        out.truncate(v.len);
        out
    }
}

impl FromIterator<i32> for DynIntArray {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
