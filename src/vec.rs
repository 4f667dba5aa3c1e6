// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `DynIntArray` type and its inherent API.
//!
//! `DynIntArray` is a growable vector of `i32` values. It owns a heap buffer
//! whose length *is* the capacity and tracks a logical length inside it.
//! Methods generally mirror slice/vector semantics, with explicit bounds
//! checks returning [`Error`] where the slice API would panic.

mod erase;
mod extend;
mod from;
mod functional;
mod insert;
mod new;
mod pop;
mod push;
mod slice;
mod sort;
mod storage;

// Crate imports
use crate::{capacity::CapacityState, error::Error};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, heap-allocated vector of `i32` values.
///
/// # Layout and invariants
///
/// Internally, `DynIntArray` maintains:
///
/// - a backing buffer `Box<[i32]>` whose length is the capacity; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Only the prefix `buf[..len]` is visible through the public API. Methods
/// such as [`as_slice`](Self::as_slice), indexing, iteration and the
/// combinators are all restricted to this prefix. The buffer is never shared,
/// so the invariants hold at every public entry point.
///
/// # Growth
///
/// Adding an element first advances the length; if the new length reaches
/// the capacity, the buffer is reallocated to `len * 2` elements (see
/// [`next_capacity`](crate::next_capacity)). Pushes are amortized `O(1)`.
/// The capacity only ever shrinks through [`shrink_to_fit`](Self::shrink_to_fit).
///
/// # Checked and panicking access
///
/// - [`at`](Self::at), [`set`](Self::set), [`insert`](Self::insert),
///   [`erase`](Self::erase) and [`swap`](Self::swap) return
///   [`Error::IndexOutOfRange`] on a bad index.
/// - [`front`](Self::front), [`back`](Self::back) and [`pop`](Self::pop)
///   return [`Error::Empty`] on an empty array.
/// - Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds, exactly like
///   built-in slices.
///
/// Arithmetic on elements is the caller's business; `i32` values are stored
/// as-is, and wrapping conversions (`x as i32`, `wrapping_*`) keep the
/// two's-complement semantics of a 32-bit integer array.
///
/// # Examples
///
/// ```rust
/// use dyn_int_array::DynIntArray;
///
/// let mut v = DynIntArray::with_capacity(2).unwrap();
/// v.push(3).unwrap();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// v.sort();
/// assert_eq!(v.as_slice(), &[1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct DynIntArray {
    pub(crate) buf: Box<[i32]>,
    pub(crate) len: usize,
}

impl DynIntArray {
    /// Returns the current logical length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the allocated length of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the `{len, capacity}` record that drives reallocation.
    #[inline]
    pub fn capacity_state(&self) -> CapacityState {
        CapacityState::new(self.len, self.buf.len())
    }

    /// Returns `Some(&i32)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&i32> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut i32)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut i32> {
        self.as_mut_slice().get_mut(i)
    }

    /// Returns the element at `i`, or [`Error::IndexOutOfRange`] if `i >= len`.
    #[inline]
    pub fn at(&self, i: usize) -> Result<i32, Error> {
        self.get(i).copied().ok_or(Error::IndexOutOfRange {
            index: i,
            len: self.len,
        })
    }

    /// Overwrites the element at `i`, or returns [`Error::IndexOutOfRange`].
    #[inline]
    pub fn set(&mut self, i: usize, value: i32) -> Result<(), Error> {
        let len = self.len;
        let slot = self
            .get_mut(i)
            .ok_or(Error::IndexOutOfRange { index: i, len })?;
        *slot = value;
        Ok(())
    }

    /// Returns the first element, or [`Error::Empty`].
    #[inline]
    pub fn front(&self) -> Result<i32, Error> {
        self.as_slice().first().copied().ok_or(Error::Empty)
    }

    /// Returns the last element, or [`Error::Empty`].
    #[inline]
    pub fn back(&self) -> Result<i32, Error> {
        self.as_slice().last().copied().ok_or(Error::Empty)
    }

    /// Swaps the elements at `i` and `j`.
    ///
    /// Both indices are checked before anything moves.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let len = self.len;
        for index in [i, j] {
            if index >= len {
                return Err(Error::IndexOutOfRange { index, len });
            }
        }
        self.as_mut_slice().swap(i, j);
        Ok(())
    }

    /// Reverses the logical elements in place. No-op when empty.
    #[inline]
    pub fn reverse(&mut self) {
        let s = self.as_mut_slice();
        let (mut i, mut j) = (0, s.len());
        while i + 1 < j {
            j -= 1;
            s.swap(i, j);
            i += 1;
        }
    }

    /// Returns `true` if both arrays hold the same values in the same order.
    ///
    /// Capacity is not compared. Same as `==`.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl fmt::Debug for DynIntArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynIntArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl PartialEq for DynIntArray {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for DynIntArray {}
impl PartialEq<[i32]> for DynIntArray {
    fn eq(&self, other: &[i32]) -> bool {
        self.as_slice() == other
    }
}
impl<const N: usize> PartialEq<[i32; N]> for DynIntArray {
    fn eq(&self, other: &[i32; N]) -> bool {
        self.as_slice() == other
    }
}
impl Ord for DynIntArray {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl PartialOrd for DynIntArray {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Hash for DynIntArray {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

/// Clones the logical elements into an exact-length array (`capacity == len`).
impl Clone for DynIntArray {
    fn clone(&self) -> Self {
        Self {
            buf: self.as_slice().into(),
            len: self.len,
        }
    }
}

impl DynIntArray {
    /// Sets `len = 0`. Capacity and buffer contents are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Returns `true` if the array contains `x` (linear scan of the logical prefix).
    #[inline]
    pub fn includes(&self, x: i32) -> bool {
        self.as_slice().contains(&x)
    }
}

impl Deref for DynIntArray {
    type Target = [i32];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl DerefMut for DynIntArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl AsRef<[i32]> for DynIntArray {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}
impl AsMut<[i32]> for DynIntArray {
    fn as_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl Borrow<[i32]> for DynIntArray {
    fn borrow(&self) -> &[i32] {
        self.as_slice()
    }
}
impl BorrowMut<[i32]> for DynIntArray {
    fn borrow_mut(&mut self) -> &mut [i32] {
        self.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::DynIntArray;
    use crate::Error;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_default_and_capacity() {
        let v = DynIntArray::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());

        let w = DynIntArray::with_capacity(4).unwrap();
        assert_eq!(w.len(), 0);
        assert_eq!(w.capacity(), 4);
        assert_eq!(w.capacity_state().growth_factor(), 2);
    }

    #[test]
    fn test_at_and_set() {
        let mut v = DynIntArray::from(&[7, 8, 9][..]);
        assert_eq!(v.at(0), Ok(7));
        assert_eq!(v.at(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        v.set(1, 80).unwrap();
        assert_eq!(v.as_slice(), &[7, 80, 9]);
        assert_eq!(v.set(3, 1), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(v.as_slice(), &[7, 80, 9]);
    }

    #[test]
    fn test_set_does_not_reach_spare_capacity() {
        let mut v = DynIntArray::with_capacity(8).unwrap();
        v.push(1).unwrap();
        assert!(v.capacity() > 1);
        assert!(v.set(1, 5).is_err());
        assert!(v.at(1).is_err());
    }

    #[test]
    fn test_front_back_on_empty_and_non_empty() {
        let mut v = DynIntArray::new();
        assert_eq!(v.front(), Err(Error::Empty));
        assert_eq!(v.back(), Err(Error::Empty));
        v.extend_from_slice(&[4, 5, 6]).unwrap();
        assert_eq!(v.front(), Ok(4));
        assert_eq!(v.back(), Ok(6));
    }

    #[test]
    fn test_swap_checks_both_indices() {
        let mut v = DynIntArray::from([1, 2, 3]);
        v.swap(0, 2).unwrap();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
        assert_eq!(v.swap(3, 0), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(v.swap(0, 7), Err(Error::IndexOutOfRange { index: 7, len: 3 }));
        assert_eq!(v.as_slice(), &[3, 2, 1]);
        v.swap(1, 1).unwrap();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_reverse() {
        let mut v = DynIntArray::from([1, 2, 3, 4, 5]);
        v.reverse();
        assert_eq!(v.as_slice(), &[5, 4, 3, 2, 1]);

        let mut even = DynIntArray::from([1, 2, 3, 4]);
        even.reverse();
        assert_eq!(even.as_slice(), &[4, 3, 2, 1]);

        let mut empty = DynIntArray::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut v = DynIntArray::from([1, 2, 3]);
        v.push(4).unwrap();
        let cap = v.capacity();
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), cap);
        v.push(9).unwrap();
        assert_eq!(v.as_slice(), &[9]);
    }

    #[test]
    fn test_includes() {
        let v = DynIntArray::from([7, -8, 9]);
        assert!(v.includes(-8));
        assert!(!v.includes(10));
        assert!(!DynIntArray::new().includes(0));
    }

    #[test]
    fn test_clone_is_exact_length_and_independent() {
        let mut v = DynIntArray::with_capacity(10).unwrap();
        v.extend_from_slice(&[1, 2, 3]).unwrap();
        let mut c = v.clone();
        assert!(v.equals(&c));
        assert_eq!(c.capacity(), 3);

        v.set(0, 100).unwrap();
        v.push(4).unwrap();
        assert_eq!(c.as_slice(), &[1, 2, 3]);

        c.push(5).unwrap();
        assert_eq!(v.as_slice(), &[100, 2, 3, 4]);
        assert_eq!(c.as_slice(), &[1, 2, 3, 5]);
    }

    #[test]
    fn test_equals_ignores_capacity() {
        let a = DynIntArray::from([1, 2, 3]);
        let mut b = DynIntArray::with_capacity(16).unwrap();
        b.extend_from_slice(&[1, 2, 3]).unwrap();
        assert!(a.equals(&b));
        assert_eq!(a, b);

        b.push(4).unwrap();
        assert!(!a.equals(&b));
        b.pop().unwrap();
        b.set(2, 4).unwrap();
        assert!(!a.equals(&b));
        assert_eq!(a, [1, 2, 3]);
        assert_eq!(a, [1, 2, 3][..]);
    }

    #[test]
    fn test_eq_ord_hash_via_slice() {
        use core::cmp::Ordering;
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = DynIntArray::from([1, 2, 3]);
        let b = DynIntArray::from([1, 2, 4]);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert!(a < b);

        let hash = |v: &DynIntArray| {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        };
        let mut c = DynIntArray::with_capacity(32).unwrap();
        c.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(hash(&a), hash(&c));
    }

    #[test]
    fn test_deref_and_as_ref() {
        let mut v = DynIntArray::from([1, 2]);
        let s: &[i32] = &v;
        assert_eq!(s, &[1, 2]);
        let smut: &mut [i32] = &mut v;
        smut[1] = 22;
        assert_eq!(v.as_slice(), &[1, 22]);
        let aref: &[i32] = v.as_ref();
        assert_eq!(aref, &[1, 22]);
        let amut: &mut [i32] = v.as_mut();
        amut[0] = 11;
        assert_eq!(v.as_slice(), &[11, 22]);
    }

    #[test]
    fn test_debug_shows_logical_prefix() {
        let mut v = DynIntArray::with_capacity(4).unwrap();
        v.push(1).unwrap();
        let s = format!("{v:?}");
        assert_eq!(s, "DynIntArray { len: 1, capacity: 4, elements: [1] }");
    }

    #[quickcheck]
    fn prop_clone_equals_source(xs: Vec<i32>) -> bool {
        let v = DynIntArray::from(xs);
        let c = v.clone();
        c.equals(&v) && c.capacity() == c.len()
    }
}
