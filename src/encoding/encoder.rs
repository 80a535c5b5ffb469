// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Array encoder, the inverse of [`decode`](super::decoder::decode).
//!
//! Packs scalars of one dtype into a byte buffer and wraps the base64 text
//! in an [`EncodedArray`] request record.

use base64::{engine::general_purpose, Engine as _};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::core::{
    ByteOrder, ConversionError, EncodedArray, NestedArray, Result, Scalar, TypeDescriptor,
};

/// Default initial capacity for the encoder buffer, in elements.
const DEFAULT_CAPACITY: usize = 16;

/// Encoder producing request records.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use ndcodec::encoding::encoder::ArrayEncoder;
/// use ndcodec::{Scalar, TypeDescriptor};
///
/// let mut encoder = ArrayEncoder::new(TypeDescriptor::parse("<i4")?);
/// for v in [1, 2, 3, 4] {
///     encoder.push(Scalar::Int32(v))?;
/// }
/// let encoded = encoder.finish(Some(vec![2, 2]));
/// assert_eq!(encoded.data, "AQAAAAIAAAADAAAABAAAAA==");
/// # Ok(())
/// # }
/// ```
pub struct ArrayEncoder {
    /// Packed element bytes
    buffer: Vec<u8>,
    /// Element type and byte order of the output
    descriptor: TypeDescriptor,
}

impl ArrayEncoder {
    pub fn new(descriptor: TypeDescriptor) -> Self {
        Self {
            buffer: Vec::with_capacity(DEFAULT_CAPACITY * descriptor.element_size()),
            descriptor,
        }
    }

    /// Number of elements written so far.
    pub fn len(&self) -> usize {
        self.buffer.len() / self.descriptor.element_size()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append one element. Its type must match the encoder's dtype.
    pub fn push(&mut self, value: Scalar) -> Result<()> {
        if value.dtype() != self.descriptor.dtype {
            return Err(ConversionError::type_mismatch(
                self.descriptor.dtype,
                value.dtype(),
            ));
        }
        match self.descriptor.byte_order {
            ByteOrder::Little => self.write_with::<LittleEndian>(value)?,
            ByteOrder::Big => self.write_with::<BigEndian>(value)?,
        }
        Ok(())
    }

    /// Append every element of `values`.
    pub fn extend<I: IntoIterator<Item = Scalar>>(&mut self, values: I) -> Result<()> {
        values.into_iter().try_for_each(|value| self.push(value))
    }

    /// Raw bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Finish encoding into a request record.
    pub fn finish(self, shape: Option<Vec<i64>>) -> EncodedArray {
        EncodedArray::new(
            general_purpose::STANDARD.encode(&self.buffer),
            self.descriptor.to_string(),
            shape,
        )
    }

    fn write_with<B: byteorder::ByteOrder>(&mut self, value: Scalar) -> std::io::Result<()> {
        let w = &mut self.buffer;
        match value {
            Scalar::Bool(v) => w.write_u8(u8::from(v)),
            Scalar::Int8(v) => w.write_i8(v),
            Scalar::Int16(v) => w.write_i16::<B>(v),
            Scalar::Int32(v) => w.write_i32::<B>(v),
            Scalar::Int64(v) => w.write_i64::<B>(v),
            Scalar::UInt8(v) => w.write_u8(v),
            Scalar::UInt16(v) => w.write_u16::<B>(v),
            Scalar::UInt32(v) => w.write_u32::<B>(v),
            Scalar::UInt64(v) => w.write_u64::<B>(v),
            Scalar::Float32(v) => w.write_f32::<B>(v),
            Scalar::Float64(v) => w.write_f64::<B>(v),
        }
    }
}

/// Encode a nested array, recording its shape.
///
/// Every list at the same depth must have the same length; ragged input is a
/// shape mismatch.
pub fn encode(array: &NestedArray, descriptor: TypeDescriptor) -> Result<EncodedArray> {
    let shape = shape_of(array)?;
    let mut encoder = ArrayEncoder::new(descriptor);
    encoder.extend(array.flatten())?;
    Ok(encoder.finish(Some(shape)))
}

/// Extents of a rectangular nested array.
fn shape_of(array: &NestedArray) -> Result<Vec<i64>> {
    let mut shape = Vec::new();
    let mut level = array;
    while let NestedArray::List(items) = level {
        shape.push(items.len() as i64);
        match items.first() {
            Some(first) => level = first,
            None => break,
        }
    }

    let expected: usize = shape.iter().map(|&d| d as usize).product();
    let found = array.element_count();
    if expected != found || !is_rectangular(array, &shape) {
        return Err(ConversionError::shape_mismatch(&shape, found));
    }
    Ok(shape)
}

fn is_rectangular(array: &NestedArray, shape: &[i64]) -> bool {
    match (array, shape.split_first()) {
        (NestedArray::Scalar(_), None) => true,
        (NestedArray::List(items), Some((&extent, inner))) => {
            items.len() as i64 == extent && items.iter().all(|item| is_rectangular(item, inner))
        }
        // An empty list ends the shape early
        (NestedArray::List(items), None) => items.is_empty(),
        (NestedArray::Scalar(_), Some(_)) => false,
    }
}
