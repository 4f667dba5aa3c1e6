// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Alloc imports
use alloc::vec;

/// Stable ascending counting sort for values in `min..=max`.
///
/// Counts each value into `max - min + 1` buckets, turns the counts into
/// end positions with a prefix sum, then places elements back to front.
/// `O(n + range)` time and memory.
///
/// Every element of `data` must lie in `min..=max`.
pub(crate) fn counting_sort(data: &mut [i32], min: i32, max: i32) {
    let range = max.abs_diff(min) as usize + 1;
    let mut count = vec![0usize; range];
    for &x in data.iter() {
        count[x.abs_diff(min) as usize] += 1;
    }

    // count[k] becomes the end (exclusive) of bucket k in the output.
    for k in 1..range {
        count[k] += count[k - 1];
    }

    let mut output = vec![0i32; data.len()];
    for &x in data.iter().rev() {
        let bucket = x.abs_diff(min) as usize;
        count[bucket] -= 1;
        output[count[bucket]] = x;
    }
    data.copy_from_slice(&output);
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;

    #[test]
    fn test_reference_example() {
        let mut v = [10, 2, 4, 6, 3, 6, 4, 5, 12];
        counting_sort(&mut v, 2, 12);
        assert_eq!(v, [2, 3, 4, 4, 5, 6, 6, 10, 12]);
    }

    #[test]
    fn test_negative_values_and_duplicates() {
        let mut v = [0, -5, 3, -5, 3, 3, -1];
        counting_sort(&mut v, -5, 3);
        assert_eq!(v, [-5, -5, -1, 0, 3, 3, 3]);
    }

    #[test]
    fn test_single_bucket() {
        let mut v = [7; 6];
        counting_sort(&mut v, 7, 7);
        assert_eq!(v, [7; 6]);
    }

    #[test]
    fn test_near_extremes() {
        let mut v = [i32::MIN + 3, i32::MIN, i32::MIN + 1, i32::MIN];
        counting_sort(&mut v, i32::MIN, i32::MIN + 3);
        assert_eq!(v, [i32::MIN, i32::MIN, i32::MIN + 1, i32::MIN + 3]);
    }
}
