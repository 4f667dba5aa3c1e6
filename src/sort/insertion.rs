// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Core imports
use core::cmp::Ordering;

/// Stable shift-and-insert sort. `O(n²)` comparisons.
///
/// An element only moves left past neighbours that compare `Greater`, so
/// equal elements keep their relative order.
pub(crate) fn insertion_sort<F>(data: &mut [i32], cmp: &mut F)
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        while j > 0 && cmp(&data[j - 1], &key) == Ordering::Greater {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;

    #[test]
    fn test_ascending_and_descending() {
        let mut v = [10, 2, 4, 6, 3, 6, 4, 5, 12];
        insertion_sort(&mut v, &mut i32::cmp);
        assert_eq!(v, [2, 3, 4, 4, 5, 6, 6, 10, 12]);

        insertion_sort(&mut v, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(v, [12, 10, 6, 6, 5, 4, 4, 3, 2]);
    }

    #[test]
    fn test_stable_under_coarse_comparator() {
        // Compare by tens digit only; ones digits record the input order.
        let mut v = [21, 11, 22, 12, 23, 13];
        insertion_sort(&mut v, &mut |a: &i32, b: &i32| (a / 10).cmp(&(b / 10)));
        assert_eq!(v, [11, 12, 13, 21, 22, 23]);
    }

    #[test]
    fn test_empty_and_single() {
        let mut e: [i32; 0] = [];
        insertion_sort(&mut e, &mut i32::cmp);
        let mut one = [5];
        insertion_sort(&mut one, &mut i32::cmp);
        assert_eq!(one, [5]);
    }
}
