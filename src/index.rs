// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`DynIntArray`](crate::DynIntArray).
//!
//! `Index` and `IndexMut` follow slice behavior, like `Vec` does:
//! - panics on out-of-bounds or inverted ranges;
//! - accepts `usize` and every standard range form;
//! - only sees the logical prefix `[0..len)`, never the spare capacity.
//!
//! Use [`DynIntArray::at`] / [`DynIntArray::set`] for checked access.

// Crate imports
use crate::vec::DynIntArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<I: SliceIndex<[i32]>> Index<I> for DynIntArray {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<I: SliceIndex<[i32]>> IndexMut<I> for DynIntArray {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
