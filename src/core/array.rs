// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Encoded and decoded array representations.

use serde::{Deserialize, Serialize};

use super::error::{ConversionError, Result};
use super::value::Scalar;

/// Request record: a base64 payload plus the metadata needed to read it.
///
/// ```
/// use ndcodec::EncodedArray;
///
/// let line = r#"{"__ndarray__": "AQI=", "dtype": "|u1", "shape": [2]}"#;
/// let encoded = EncodedArray::from_json(line).unwrap();
/// assert_eq!(encoded.dtype, "|u1");
/// assert_eq!(encoded.shape, Some(vec![2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedArray {
    /// Base64 text of the packed element bytes
    #[serde(rename = "__ndarray__")]
    pub data: String,
    /// dtype string, resolved by [`TypeDescriptor::parse`](crate::TypeDescriptor::parse)
    pub dtype: String,
    /// Dimension extents; absent or empty means flat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<i64>>,
}

impl EncodedArray {
    pub fn new(data: impl Into<String>, dtype: impl Into<String>, shape: Option<Vec<i64>>) -> Self {
        Self {
            data: data.into(),
            dtype: dtype.into(),
            shape,
        }
    }

    /// Parse one JSON request line.
    pub fn from_json(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| ConversionError::parse("request", e.to_string()))
    }

    /// Serialize back to a single JSON line.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ConversionError::render("request", e.to_string()))
    }

    /// Shape as a slice, empty when absent.
    pub fn shape(&self) -> &[i64] {
        self.shape.as_deref().unwrap_or(&[])
    }
}

/// A decoded array: scalars nested in lists, one level per dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedArray {
    Scalar(Scalar),
    List(Vec<NestedArray>),
}

impl NestedArray {
    /// Flat list of scalars.
    pub fn flat(values: Vec<Scalar>) -> Self {
        NestedArray::List(values.into_iter().map(NestedArray::Scalar).collect())
    }

    /// Try to get the inner list.
    pub fn as_list(&self) -> Option<&[NestedArray]> {
        match self {
            NestedArray::List(items) => Some(items),
            NestedArray::Scalar(_) => None,
        }
    }

    /// Try to get the inner scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            NestedArray::Scalar(v) => Some(v),
            NestedArray::List(_) => None,
        }
    }

    /// Nesting depth; a scalar has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            NestedArray::Scalar(_) => 0,
            NestedArray::List(items) => 1 + items.first().map_or(0, NestedArray::depth),
        }
    }

    /// Total number of scalars in the structure.
    pub fn element_count(&self) -> usize {
        match self {
            NestedArray::Scalar(_) => 1,
            NestedArray::List(items) => items.iter().map(NestedArray::element_count).sum(),
        }
    }

    /// Scalars in row-major order.
    pub fn flatten(&self) -> Vec<Scalar> {
        let mut out = Vec::with_capacity(self.element_count());
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<Scalar>) {
        match self {
            NestedArray::Scalar(v) => out.push(*v),
            NestedArray::List(items) => items.iter().for_each(|item| item.collect_into(out)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_record() {
        let line = r#"{"__ndarray__": "AQAAAAIAAAADAAAABAAAAA==", "dtype": "<i4", "shape": [2,2]}"#;
        let encoded = EncodedArray::from_json(line).unwrap();
        assert_eq!(encoded.data, "AQAAAAIAAAADAAAABAAAAA==");
        assert_eq!(encoded.dtype, "<i4");
        assert_eq!(encoded.shape(), &[2, 2]);
    }

    #[test]
    fn test_from_json_without_shape() {
        let encoded = EncodedArray::from_json(r#"{"__ndarray__": "", "dtype": "<f8"}"#).unwrap();
        assert_eq!(encoded.shape, None);
        assert!(encoded.shape().is_empty());
    }

    #[test]
    fn test_from_json_missing_fields() {
        for line in [
            r#"{"dtype": "<i4"}"#,
            r#"{"__ndarray__": "AA=="}"#,
            "not json",
            "",
            "[1, 2]",
        ] {
            let err = EncodedArray::from_json(line).unwrap_err();
            assert_eq!(err.kind(), "ParseError", "line {line:?}");
        }
    }

    #[test]
    fn test_to_json_uses_ndarray_key() {
        let encoded = EncodedArray::new("AA==", "|u1", None);
        assert_eq!(
            encoded.to_json().unwrap(),
            r#"{"__ndarray__":"AA==","dtype":"|u1"}"#
        );
    }

    #[test]
    fn test_nested_helpers() {
        let array = NestedArray::List(vec![
            NestedArray::flat(vec![Scalar::Int32(1), Scalar::Int32(2)]),
            NestedArray::flat(vec![Scalar::Int32(3), Scalar::Int32(4)]),
        ]);
        assert_eq!(array.depth(), 2);
        assert_eq!(array.element_count(), 4);
        assert_eq!(
            array.flatten(),
            vec![
                Scalar::Int32(1),
                Scalar::Int32(2),
                Scalar::Int32(3),
                Scalar::Int32(4)
            ]
        );
        assert_eq!(array.as_list().map(<[_]>::len), Some(2));
        assert!(array.as_scalar().is_none());
    }

    #[test]
    fn test_json_serialization() {
        let array = NestedArray::List(vec![
            NestedArray::flat(vec![Scalar::UInt8(1), Scalar::UInt8(2)]),
            NestedArray::List(vec![]),
        ]);
        assert_eq!(serde_json::to_string(&array).unwrap(), "[[1,2],[]]");
    }
}
