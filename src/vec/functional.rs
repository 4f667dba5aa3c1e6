// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Callback-driven combinators.
//!
//! Every callback receives `(value, index, &array)`, visiting elements from
//! index 0 upward. The array is borrowed immutably for the whole call, so
//! callbacks cannot mutate it while a traversal is in progress.

// Crate imports
use crate::{error::Error, vec::DynIntArray};

// Alloc imports
use alloc::vec::Vec;

impl DynIntArray {
    /// Calls `f` on every element in order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(i32, usize, &Self),
    {
        for (i, &x) in self.as_slice().iter().enumerate() {
            f(x, i, self);
        }
    }

    /// Returns a new array holding `f` applied to every element, in order.
    pub fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(i32, usize, &Self) -> i32,
    {
        let out: Vec<i32> = self
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, &x)| f(x, i, self))
            .collect();
        Self::from(out)
    }

    /// Returns a new array holding the elements for which `f` returns `true`,
    /// in order.
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(i32, usize, &Self) -> bool,
    {
        let out: Vec<i32> = self
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(i, &x)| f(x, i, self))
            .map(|(_, &x)| x)
            .collect();
        Self::from(out)
    }

    /// Folds the elements into a single `i32`.
    ///
    /// With `Some(initial)` the accumulator starts at `initial` and every
    /// element is visited. With `None` it starts at the first element and
    /// folding begins at index 1.
    ///
    /// Returns [`Error::EmptyReduce`] if the array is empty and no initial
    /// value was given; an empty array with an initial value yields it
    /// unchanged.
    pub fn reduce<F>(&self, mut f: F, initial: Option<i32>) -> Result<i32, Error>
    where
        F: FnMut(i32, i32, usize, &Self) -> i32,
    {
        let (mut acc, start) = match initial {
            Some(init) => (init, 0),
            None => (self.front().map_err(|_| Error::EmptyReduce)?, 1),
        };
        for (i, &x) in self.as_slice().iter().enumerate().skip(start) {
            acc = f(acc, x, i, self);
        }
        Ok(acc)
    }

    /// Folds the elements into an accumulator of any type, starting at `init`.
    pub fn fold<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, i32, usize, &Self) -> A,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .fold(init, |acc, (i, &x)| f(acc, x, i, self))
    }

    /// Returns `true` as soon as `f` returns `true` for some element.
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(i32, usize, &Self) -> bool,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .any(|(i, &x)| f(x, i, self))
    }

    /// Returns `false` as soon as `f` returns `false` for some element.
    ///
    /// `true` for an empty array.
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(i32, usize, &Self) -> bool,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .all(|(i, &x)| f(x, i, self))
    }

    /// Returns the first element for which `f` returns `true`.
    pub fn find<F>(&self, mut f: F) -> Option<i32>
    where
        F: FnMut(i32, usize, &Self) -> bool,
    {
        self.find_index(&mut f).map(|i| self.buf[i])
    }

    /// Returns the index of the first element for which `f` returns `true`.
    pub fn find_index<F>(&self, mut f: F) -> Option<usize>
    where
        F: FnMut(i32, usize, &Self) -> bool,
    {
        self.as_slice()
            .iter()
            .enumerate()
            .position(|(i, &x)| f(x, i, self))
    }
}
