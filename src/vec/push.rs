// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::DynIntArray};

impl DynIntArray {
    /// Appends `value`, growing the buffer first if the new length reaches
    /// the capacity.
    ///
    /// Returns [`Error::InvalidArgument`] only if the array is already at
    /// `MAX_CAPACITY`; the array is unchanged in that case.
    #[inline]
    pub fn push(&mut self, value: i32) -> Result<(), Error> {
        let next = self.capacity_state().after_push()?;
        if next.capacity != self.capacity() {
            self.resize_buffer(next.capacity);
        }
        self.buf[self.len] = value;
        self.len = next.len;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynIntArray;

    #[test]
    fn test_push_from_zero_capacity() {
        let mut v = DynIntArray::new();
        v.push(7).unwrap();
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[7]);
        v.push(8).unwrap();
        assert_eq!(v.capacity(), 4);
        assert_eq!(v.as_slice(), &[7, 8]);
    }

    #[test]
    fn test_thirty_five_pushes_into_capacity_five() {
        let mut v = DynIntArray::with_capacity(5).unwrap();
        let mut growth = Vec::new();
        for x in 5..40 {
            let before = v.capacity();
            v.push(x).unwrap();
            assert!(v.len() <= v.capacity());
            if v.capacity() != before {
                assert_eq!(v.capacity(), v.len() * 2);
                growth.push(v.capacity());
            }
        }
        assert_eq!(v.len(), 35);
        assert_eq!(growth, vec![10, 20, 40]);
        assert_eq!(v.front(), Ok(5));
        assert_eq!(v.back(), Ok(39));
        assert_eq!(v.to_vec(), (5..40).collect::<Vec<_>>());
    }

    #[test]
    fn test_push_stores_extreme_values() {
        let mut v = DynIntArray::new();
        v.push(i32::MIN).unwrap();
        v.push(i32::MAX).unwrap();
        v.push(i32::MAX.wrapping_add(1)).unwrap();
        assert_eq!(v.as_slice(), &[i32::MIN, i32::MAX, i32::MIN]);
    }
}
