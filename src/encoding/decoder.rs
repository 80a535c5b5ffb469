// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Array decoder
//!
//! Turns an [`EncodedArray`] into a [`NestedArray`]: resolve the dtype,
//! base64-decode the payload, read the elements, then reshape them row-major.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndcodec::encoding::decoder::decode;
//! use ndcodec::EncodedArray;
//!
//! let encoded = EncodedArray::new("AQAAAAIAAAADAAAABAAAAA==", "<i4", Some(vec![2, 2]));
//! let decoded = decode(&encoded)?;
//! assert_eq!(decoded.depth(), 2);
//! assert_eq!(decoded.element_count(), 4);
//! # Ok(())
//! # }
//! ```

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use super::cursor::ElementCursor;
use crate::core::{ConversionError, EncodedArray, NestedArray, Result, Scalar, TypeDescriptor};

/// Maximum number of dimensions a shape may have, numpy's `NPY_MAXDIMS`.
pub const MAX_DIMS: usize = 64;

/// Decode a request record into its nested structure.
///
/// The dtype is resolved before the payload is touched, so an unknown dtype
/// wins over a broken payload.
pub fn decode(encoded: &EncodedArray) -> Result<NestedArray> {
    let descriptor = TypeDescriptor::parse(&encoded.dtype)?;
    let bytes = general_purpose::STANDARD.decode(encoded.data.as_bytes())?;
    debug!(
        dtype = %descriptor,
        byte_len = bytes.len(),
        "payload decoded"
    );

    let values = decode_elements(&bytes, descriptor)?;
    debug!(element_count = values.len(), shape = ?encoded.shape(), "elements read");

    reshape(values, encoded.shape())
}

/// Interpret a raw buffer as a flat sequence of elements.
pub fn decode_elements(bytes: &[u8], descriptor: TypeDescriptor) -> Result<Vec<Scalar>> {
    ElementCursor::new(bytes, descriptor)?.read_all()
}

/// Arrange a flat sequence into `shape`, last axis fastest.
///
/// Shapes with fewer than two entries leave the sequence flat. Shapes with
/// more than [`MAX_DIMS`] entries are a shape mismatch.
pub fn reshape(values: Vec<Scalar>, shape: &[i64]) -> Result<NestedArray> {
    if shape.len() <= 1 {
        return Ok(NestedArray::flat(values));
    }

    let dims = resolve_shape(shape, values.len())?;
    Ok(build(&dims, &values))
}

/// Turn the requested shape into concrete extents, inferring a single `-1`.
fn resolve_shape(shape: &[i64], element_count: usize) -> Result<Vec<usize>> {
    let mismatch = || ConversionError::shape_mismatch(shape, element_count);
    if shape.len() > MAX_DIMS {
        return Err(mismatch());
    }

    let mut inferred = None;
    let mut known_product: usize = 1;
    let mut dims = Vec::with_capacity(shape.len());
    for (axis, &extent) in shape.iter().enumerate() {
        if extent == -1 {
            if inferred.replace(axis).is_some() {
                return Err(mismatch());
            }
            dims.push(0);
            continue;
        }
        let extent = usize::try_from(extent).map_err(|_| mismatch())?;
        known_product = known_product.checked_mul(extent).ok_or_else(mismatch)?;
        dims.push(extent);
    }

    match inferred {
        Some(axis) => {
            if known_product == 0 || element_count % known_product != 0 {
                return Err(mismatch());
            }
            dims[axis] = element_count / known_product;
        }
        None if known_product != element_count => return Err(mismatch()),
        None => {}
    }

    Ok(dims)
}

/// Row-major construction. `values.len()` equals the product of `dims`.
fn build(dims: &[usize], values: &[Scalar]) -> NestedArray {
    match dims.split_first() {
        None => NestedArray::Scalar(values[0]),
        Some((&extent, inner)) => {
            let stride: usize = inner.iter().product();
            let items = (0..extent)
                .map(|i| build(inner, &values[i * stride..(i + 1) * stride]))
                .collect();
            NestedArray::List(items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i32]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Int32).collect()
    }

    #[test]
    fn test_reshape_flat_when_shape_short() {
        let flat = NestedArray::flat(ints(&[1, 2, 3]));
        assert_eq!(reshape(ints(&[1, 2, 3]), &[]).unwrap(), flat);
        assert_eq!(reshape(ints(&[1, 2, 3]), &[3]).unwrap(), flat);
        // A single extent is not checked against the element count
        assert_eq!(reshape(ints(&[1, 2, 3]), &[7]).unwrap(), flat);
    }

    #[test]
    fn test_reshape_row_major() {
        let nested = reshape(ints(&[1, 2, 3, 4, 5, 6]), &[2, 3]).unwrap();
        let expected = NestedArray::List(vec![
            NestedArray::flat(ints(&[1, 2, 3])),
            NestedArray::flat(ints(&[4, 5, 6])),
        ]);
        assert_eq!(nested, expected);

        let nested = reshape(ints(&(0..24).collect::<Vec<_>>()), &[2, 3, 4]).unwrap();
        let outer = nested.as_list().unwrap();
        assert_eq!(outer.len(), 2);
        let row = &outer[1].as_list().unwrap()[2];
        assert_eq!(row, &NestedArray::flat(ints(&[20, 21, 22, 23])));
    }

    #[test]
    fn test_reshape_infers_minus_one() {
        let nested = reshape(ints(&[1, 2, 3, 4, 5, 6]), &[-1, 2]).unwrap();
        assert_eq!(nested.as_list().unwrap().len(), 3);
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn test_reshape_zero_sized_dimensions() {
        assert_eq!(
            reshape(vec![], &[0, 3]).unwrap(),
            NestedArray::List(vec![])
        );
        assert_eq!(
            reshape(vec![], &[2, 0]).unwrap(),
            NestedArray::List(vec![NestedArray::List(vec![]), NestedArray::List(vec![])])
        );
    }

    #[test]
    fn test_reshape_mismatch() {
        for shape in [
            vec![2, 3],
            vec![3, 3],
            vec![-1, -1],
            vec![-2, 2],
            vec![-1, 4],
            vec![-1, 0],
            vec![i64::MAX, i64::MAX],
        ] {
            let err = reshape(ints(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), &shape).unwrap_err();
            assert_eq!(err, ConversionError::shape_mismatch(&shape, 10), "shape {shape:?}");
        }
    }

    #[test]
    fn test_reshape_rejects_too_many_dimensions() {
        let deepest = vec![1i64; MAX_DIMS];
        let nested = reshape(ints(&[7]), &deepest).unwrap();
        assert_eq!(nested.depth(), MAX_DIMS);

        let shape = vec![1i64; MAX_DIMS + 1];
        let err = reshape(ints(&[7]), &shape).unwrap_err();
        assert_eq!(err, ConversionError::shape_mismatch(&shape, 1));

        let shape = vec![1i64; 100_000];
        let err = reshape(ints(&[7]), &shape).unwrap_err();
        assert_eq!(err.kind(), "ShapeMismatchError");
    }

    #[test]
    fn test_decode_scenario() {
        let encoded = EncodedArray::new("AQAAAAIAAAADAAAABAAAAA==", "<i4", Some(vec![2, 2]));
        let decoded = decode(&encoded).unwrap();
        assert_eq!(
            decoded,
            NestedArray::List(vec![
                NestedArray::flat(ints(&[1, 2])),
                NestedArray::flat(ints(&[3, 4])),
            ])
        );
    }

    #[test]
    fn test_decode_error_order() {
        let encoded = EncodedArray::new("!!!", "unknown", None);
        assert_eq!(decode(&encoded).unwrap_err().kind(), "UnsupportedTypeError");

        let encoded = EncodedArray::new("!!!", "<i4", None);
        assert_eq!(decode(&encoded).unwrap_err().kind(), "DecodeError");

        let encoded = EncodedArray::new("AQID", "<i4", None);
        assert_eq!(
            decode(&encoded).unwrap_err(),
            ConversionError::size_mismatch(3, 4)
        );
    }
}
