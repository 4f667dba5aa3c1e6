// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `dyn-int-array`
//!
//! A `no_std` (with `alloc`), growable array of `i32` values with checked
//! element access, callback combinators and an adaptive sort,
//! **with no `unsafe`**.
//!
//! The core type, [`DynIntArray`], owns a heap buffer whose length is its
//! capacity and tracks a logical length `len <= capacity` inside it.
//!
//! ## High-level semantics
//!
//! - Adding an element advances the length first; when the new length
//!   reaches the capacity the buffer is reallocated to `len * 2`
//!   ([`GROWTH_FACTOR`]). The growth rule is exposed as the pure function
//!   [`next_capacity`] and the [`CapacityState`] record.
//! - The capacity only shrinks through [`DynIntArray::shrink_to_fit`].
//!   [`DynIntArray::clear`] keeps it.
//! - Checked operations ([`at`](DynIntArray::at), [`set`](DynIntArray::set),
//!   [`insert`](DynIntArray::insert), [`erase`](DynIntArray::erase),
//!   [`swap`](DynIntArray::swap), [`front`](DynIntArray::front),
//!   [`back`](DynIntArray::back), [`pop`](DynIntArray::pop),
//!   [`reserve`](DynIntArray::reserve)) return an [`Error`] and leave the
//!   array unchanged on failure.
//! - Indexing (`v[i]`, `v[a..b]`) panics on out-of-bounds, like slices.
//! - Combinators ([`map`](DynIntArray::map), [`filter`](DynIntArray::filter),
//!   [`reduce`](DynIntArray::reduce), ...) take closures of the form
//!   `(value, index, &array)`. `map` and `filter` return new arrays.
//!
//! ## Adaptive sort
//!
//! [`DynIntArray::sort_by`] picks one algorithm per call:
//!
//! | condition                          | algorithm       | order            |
//! |------------------------------------|-----------------|------------------|
//! | `len <= 50`                        | insertion sort  | comparator, stable |
//! | `len > 50`, `max - min <= 100`     | counting sort   | **ascending**, comparator ignored |
//! | otherwise                          | quicksort       | comparator       |
//!
//! [`DynIntArray::sort_strategy`] reports the choice without sorting.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `DynIntArray` as a plain
//!   sequence of integers.
//!
//! ## Logging
//!
//! Reallocations are reported at `debug` level and sort strategy selection
//! at `trace` level through the [`log`](https://docs.rs/log) facade.
//!
//! ## Example
//!
//! ```rust
//! use dyn_int_array::DynIntArray;
//!
//! let mut v = DynIntArray::with_capacity(4).unwrap();
//! v.extend_from_slice(&[1, 2, 3, 4]).unwrap();
//! v.insert(2, 100).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 100, 3, 4]);
//! assert_eq!(v.erase(2), Ok(100));
//!
//! let doubled = v.map(|x, _, _| x * 2);
//! assert_eq!(doubled.reduce(|acc, x, _, _| acc + x, None), Ok(20));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod capacity;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod sort;
mod vec;

// Public exports (crate API surface)
pub use capacity::{next_capacity, CapacityState, GROWTH_FACTOR, MAX_CAPACITY};
pub use error::Error;
pub use iter::{Entries, IntoIter, Keys, Values};
pub use sort::{SortStrategy, COUNTING_SORT_MAX_SPAN, INSERTION_SORT_MAX_LEN};
pub use vec::DynIntArray;
