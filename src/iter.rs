// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`DynIntArray`](crate::DynIntArray).
//!
//! - [`Values`] (from `iter()` / `values()`), [`Keys`] and [`Entries`] borrow
//!   the array and yield values, indices and `(index, value)` pairs.
//! - `IntoIter` yields by value from an owned array.
//! - All of them support `DoubleEndedIterator`, `ExactSizeIterator` and
//!   `FusedIterator`.
//!
//! Every call to a view method returns a fresh iterator starting at index 0,
//! bounded by the length at the time of the call. Views hold a shared borrow,
//! so the array cannot be mutated while one is alive.

// Crate imports
use crate::vec::DynIntArray;

// Core imports
use core::iter::FusedIterator;

/// Cursor pair over `[front, back)` shared by all the iterators below.
#[derive(Debug, Clone)]
struct Cursor {
    front: usize,
    back: usize, // exclusive
}

impl Cursor {
    fn new(len: usize) -> Self {
        Self { front: 0, back: len }
    }

    fn next(&mut self) -> Option<usize> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            Some(i)
        } else {
            None
        }
    }

    fn next_back(&mut self) -> Option<usize> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.back)
        } else {
            None
        }
    }

    fn nth(&mut self, n: usize) -> Option<usize> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    fn nth_back(&mut self, n: usize) -> Option<usize> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }

    fn len(&self) -> usize {
        self.back - self.front
    }
}

macro_rules! view_iterator {
    ($name:ident $(<$lt:lifetime>)?, $item:ty, |$this:ident, $i:ident| $get:expr) => {
        impl$(<$lt>)? Iterator for $name$(<$lt>)? {
            type Item = $item;
            fn next(&mut self) -> Option<$item> {
                let $i = self.cursor.next()?;
                let $this = &*self;
                Some($get)
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                let rem = self.cursor.len();
                (rem, Some(rem))
            }
            fn nth(&mut self, n: usize) -> Option<$item> {
                let $i = self.cursor.nth(n)?;
                let $this = &*self;
                Some($get)
            }
        }

        impl$(<$lt>)? DoubleEndedIterator for $name$(<$lt>)? {
            fn next_back(&mut self) -> Option<$item> {
                let $i = self.cursor.next_back()?;
                let $this = &*self;
                Some($get)
            }
            fn nth_back(&mut self, n: usize) -> Option<$item> {
                let $i = self.cursor.nth_back(n)?;
                let $this = &*self;
                Some($get)
            }
        }

        impl$(<$lt>)? ExactSizeIterator for $name$(<$lt>)? {}
        impl$(<$lt>)? FusedIterator for $name$(<$lt>)? {}
    };
}

/// Yields the elements by value, front to back.
///
/// Returned by [`DynIntArray::iter`] and [`DynIntArray::values`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    data: &'a [i32],
    cursor: Cursor,
}
view_iterator!(Values<'a>, i32, |this, i| this.data[i]);

/// Yields the indices `0..len`.
///
/// Returned by [`DynIntArray::keys`].
#[derive(Debug, Clone)]
pub struct Keys<'a> {
    _array: &'a DynIntArray,
    cursor: Cursor,
}
view_iterator!(Keys<'a>, usize, |_this, i| i);

/// Yields `(index, value)` pairs.
///
/// Returned by [`DynIntArray::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    data: &'a [i32],
    cursor: Cursor,
}
view_iterator!(Entries<'a>, (usize, i32), |this, i| (i, this.data[i]));

/// Owned iterator returned by `DynIntArray::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
#[derive(Debug, Clone)]
pub struct IntoIter {
    v: DynIntArray,
    cursor: Cursor,
}
view_iterator!(IntoIter, i32, |this, i| this.v.buf[i]);

impl DynIntArray {
    /// Returns a fresh iterator over the element values.
    #[inline]
    pub fn iter(&self) -> Values<'_> {
        self.values()
    }

    /// Returns a fresh iterator over the element values.
    #[inline]
    pub fn values(&self) -> Values<'_> {
        Values {
            data: self.as_slice(),
            cursor: Cursor::new(self.len),
        }
    }

    /// Returns a fresh iterator over the valid indices.
    #[inline]
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            _array: self,
            cursor: Cursor::new(self.len),
        }
    }

    /// Returns a fresh iterator over `(index, value)` pairs.
    #[inline]
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            data: self.as_slice(),
            cursor: Cursor::new(self.len),
        }
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, i32> {
        self.as_mut_slice().iter_mut()
    }
}

impl<'a> IntoIterator for &'a DynIntArray {
    type Item = i32;
    type IntoIter = Values<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
impl<'a> IntoIterator for &'a mut DynIntArray {
    type Item = &'a mut i32;
    type IntoIter = core::slice::IterMut<'a, i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl IntoIterator for DynIntArray {
    type Item = i32;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            cursor: Cursor::new(self.len),
            v: self,
        }
    }
}
