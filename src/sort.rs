// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adaptive sort engine behind [`DynIntArray::sort`](crate::DynIntArray::sort).
//!
//! One call picks exactly one of three algorithms, evaluated in this order:
//!
//! 1. `len <= INSERTION_SORT_MAX_LEN` (50): stable insertion sort driven by
//!    the comparator;
//! 2. `max - min <= COUNTING_SORT_MAX_SPAN` (100): stable counting sort over
//!    `max - min + 1` buckets. **Always ascending**: the comparator is not
//!    consulted on this path;
//! 3. otherwise: quicksort with a first-element pivot and a two-cursor
//!    partition, driven by the comparator.
//!
//! Arrays with fewer than two elements are left untouched and never reach
//! the selection step.
//!
//! The algorithms operate on plain `&mut [i32]`.

mod counting;
mod insertion;
mod quick;

pub(crate) use counting::counting_sort;
pub(crate) use insertion::insertion_sort;
pub(crate) use quick::quick_sort;

// Core imports
use core::fmt;

/// Arrays up to this length are insertion-sorted.
pub const INSERTION_SORT_MAX_LEN: usize = 50;

/// Longer arrays whose `max - min` is at most this are counting-sorted.
pub const COUNTING_SORT_MAX_SPAN: u32 = 100;

/// The algorithm [`DynIntArray::sort`](crate::DynIntArray::sort) runs for a
/// given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Comparator-driven stable insertion sort (`len <= 50`).
    Insertion,
    /// Ascending counting sort over a value span of at most 100.
    Counting,
    /// Comparator-driven quicksort.
    Quick,
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion => f.write_str("insertion"),
            Self::Counting => f.write_str("counting"),
            Self::Quick => f.write_str("quick"),
        }
    }
}

/// Smallest and largest element, in one pass. `None` for an empty slice.
pub(crate) fn min_max(data: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &x| {
        (lo.min(x), hi.max(x))
    }))
}

/// Picks the algorithm for `data`; `None` when there is nothing to sort.
pub(crate) fn select(data: &[i32]) -> Option<SortStrategy> {
    if data.len() < 2 {
        return None;
    }
    if data.len() <= INSERTION_SORT_MAX_LEN {
        return Some(SortStrategy::Insertion);
    }
    let (min, max) = min_max(data)?;
    if max.abs_diff(min) <= COUNTING_SORT_MAX_SPAN {
        Some(SortStrategy::Counting)
    } else {
        Some(SortStrategy::Quick)
    }
}
