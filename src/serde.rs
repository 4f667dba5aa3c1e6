// This file is part of dyn-int-array.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`DynIntArray`](crate::DynIntArray).
//!
//! - **Serialize**: as a sequence of the `len` logical elements. Capacity is
//!   not part of the representation.
//! - **Deserialize**: from any sequence of `i32`, growing as needed.

// Crate imports
use crate::vec::DynIntArray;

// Core imports
use core::fmt;

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for DynIntArray {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ArrayVisitor;

impl<'de> de::Visitor<'de> for ArrayVisitor {
    type Value = DynIntArray;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of 32-bit signed integers")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = DynIntArray::new();
        // At most 4096 up front; anything beyond grows through `push`.
        let hint = a.size_hint().unwrap_or(0).min(4096);
        out.reserve(hint).map_err(<A::Error as de::Error>::custom)?;
        while let Some(elem) = a.next_element::<i32>()? {
            out.push(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de> Deserialize<'de> for DynIntArray {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ArrayVisitor)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::DynIntArray;

    #[test]
    fn test_serde_roundtrip_json() {
        let mut v = DynIntArray::with_capacity(10).unwrap();
        v.extend_from_slice(&[1, -2, 3]).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,-2,3]");
        let back: DynIntArray = serde_json::from_str(&s).unwrap();
        assert_eq!(back, v);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v = DynIntArray::new();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: DynIntArray = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_deserialize_grows_past_any_initial_capacity() {
        let json = serde_json::to_string(&(0..100).collect::<Vec<i32>>()).unwrap();
        let back: DynIntArray = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 100);
        assert!(back.capacity() >= 100);
    }

    #[test]
    fn test_deserialize_rejects_out_of_width_values() {
        let err = serde_json::from_str::<DynIntArray>("[1, 2147483648]").unwrap_err();
        assert!(err.to_string().contains("2147483648"), "msg: {err}");
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<DynIntArray>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(
            msg.contains("a sequence of 32-bit signed integers"),
            "unexpected error message: {msg}"
        );
    }
}
