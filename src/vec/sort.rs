// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    sort::{self, SortStrategy},
    vec::DynIntArray,
};

// Core imports
use core::cmp::Ordering;

impl DynIntArray {
    /// Sorts the array in ascending order.
    ///
    /// Equivalent to `self.sort_by(i32::cmp)`; see [`sort_by`](Self::sort_by)
    /// for how the algorithm is chosen.
    #[inline]
    pub fn sort(&mut self) {
        self.sort_by(i32::cmp)
    }

    /// Sorts the array in place with the comparator `cmp`.
    ///
    /// The algorithm is picked once per call (see [`sort_strategy`](Self::sort_strategy)):
    ///
    /// - `len <= 50`: stable insertion sort, ordered by `cmp`;
    /// - `len > 50` and `max - min <= 100`: counting sort, **always ascending**.
    ///   `cmp` is ignored on this path in exchange for `O(n + range)` time;
    /// - otherwise: quicksort, ordered by `cmp` (not stable).
    ///
    /// Empty and single-element arrays are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dyn_int_array::DynIntArray;
    ///
    /// let mut small = DynIntArray::from([3, 1, 2]);
    /// small.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(small.as_slice(), &[3, 2, 1]);
    ///
    /// // 60 values spanning less than 100: the comparator is not used.
    /// let mut narrow: DynIntArray = (0..60).rev().collect();
    /// narrow.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(narrow.to_vec(), (0..60).collect::<Vec<_>>());
    /// ```
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&i32, &i32) -> Ordering,
    {
        let data = self.as_mut_slice();
        let Some(strategy) = sort::select(data) else {
            return;
        };
        log::trace!("sorting {} elements with {strategy} sort", data.len());
        match strategy {
            SortStrategy::Insertion => sort::insertion_sort(data, &mut cmp),
            SortStrategy::Counting => {
                if let Some((min, max)) = sort::min_max(data) {
                    sort::counting_sort(data, min, max);
                }
            }
            SortStrategy::Quick => sort::quick_sort(data, &mut cmp),
        }
    }

    /// Reports which algorithm [`sort_by`](Self::sort_by) would run on the
    /// current contents, or `None` if there are fewer than two elements.
    #[inline]
    pub fn sort_strategy(&self) -> Option<SortStrategy> {
        sort::select(self.as_slice())
    }
}
