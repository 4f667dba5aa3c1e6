// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::cmp::Ordering;

/// Quicksort with a first-element pivot.
///
/// Recurses into the smaller side of each partition and loops on the larger
/// one, so stack depth stays `O(log n)` even on already-sorted input, where
/// the first-element pivot degrades to `O(n²)` comparisons.
pub(crate) fn quick_sort<F>(data: &mut [i32], cmp: &mut F)
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    let mut rest = data;
    while rest.len() > 1 {
        let pivot = partition(rest, cmp);
        let (left, right) = core::mem::take(&mut rest).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, cmp);
            rest = right;
        } else {
            quick_sort(right, cmp);
            rest = left;
        }
    }
}

/// Two-cursor partition around `data[0]`.
///
/// The left cursor skips elements that are not `Greater` than the pivot, the
/// right cursor skips elements that are. Out-of-place pairs are swapped, and
/// finally the pivot is swapped into the slot where the cursors crossed.
/// Returns that slot.
///
/// Both cursors stay inside `data` whatever the comparator returns.
fn partition<F>(data: &mut [i32], cmp: &mut F) -> usize
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    let pivot = data[0];
    let mut i = 1;
    let mut j = data.len() - 1;
    loop {
        while i <= j && cmp(&data[i], &pivot) != Ordering::Greater {
            i += 1;
        }
        while i <= j && cmp(&data[j], &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
    }
    data.swap(0, j);
    j
}
