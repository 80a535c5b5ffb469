// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Typed element reads over a raw payload buffer.
//!
//! The cursor is created for one [`TypeDescriptor`] and yields one [`Scalar`]
//! per element width, honouring the descriptor's byte order.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndcodec::encoding::cursor::ElementCursor;
//! use ndcodec::{Scalar, TypeDescriptor};
//!
//! let data = [0x2A, 0x00, 0x00, 0x00];
//! let mut cursor = ElementCursor::new(&data, TypeDescriptor::parse("<i4")?)?;
//! assert_eq!(cursor.read_scalar()?, Scalar::Int32(42));
//! assert!(cursor.is_at_end());
//! # Ok(())
//! # }
//! ```

use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::core::{ByteOrder, ConversionError, DType, Result, Scalar, TypeDescriptor};

/// Cursor that reads fixed-width elements of a single dtype.
pub struct ElementCursor<'a> {
    /// Payload bytes and read position
    inner: Cursor<&'a [u8]>,
    /// Element type and byte order
    descriptor: TypeDescriptor,
}

impl<'a> ElementCursor<'a> {
    /// Create a cursor over `data`.
    ///
    /// Fails with a size mismatch when `data` is not a whole number of
    /// elements.
    pub fn new(data: &'a [u8], descriptor: TypeDescriptor) -> Result<Self> {
        let element_size = descriptor.element_size();
        if data.len() % element_size != 0 {
            return Err(ConversionError::size_mismatch(data.len(), element_size));
        }
        Ok(Self {
            inner: Cursor::new(data),
            descriptor,
        })
    }

    /// Total number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.get_ref().len() / self.descriptor.element_size()
    }

    /// Check if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        let consumed = self.inner.position() as usize;
        (self.inner.get_ref().len() - consumed) / self.descriptor.element_size()
    }

    /// Check if every element has been read.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Read the next element.
    pub fn read_scalar(&mut self) -> Result<Scalar> {
        let value = match self.descriptor.byte_order {
            ByteOrder::Little => self.read_with::<LittleEndian>(),
            ByteOrder::Big => self.read_with::<BigEndian>(),
        }?;
        Ok(value)
    }

    /// Read every remaining element.
    pub fn read_all(mut self) -> Result<Vec<Scalar>> {
        let mut values = Vec::with_capacity(self.remaining());
        while !self.is_at_end() {
            values.push(self.read_scalar()?);
        }
        Ok(values)
    }

    fn read_with<B: byteorder::ByteOrder>(&mut self) -> std::io::Result<Scalar> {
        let r = &mut self.inner;
        Ok(match self.descriptor.dtype {
            DType::Bool => Scalar::Bool(r.read_u8()? != 0),
            DType::Int8 => Scalar::Int8(r.read_i8()?),
            DType::Int16 => Scalar::Int16(r.read_i16::<B>()?),
            DType::Int32 => Scalar::Int32(r.read_i32::<B>()?),
            DType::Int64 => Scalar::Int64(r.read_i64::<B>()?),
            DType::UInt8 => Scalar::UInt8(r.read_u8()?),
            DType::UInt16 => Scalar::UInt16(r.read_u16::<B>()?),
            DType::UInt32 => Scalar::UInt32(r.read_u32::<B>()?),
            DType::UInt64 => Scalar::UInt64(r.read_u64::<B>()?),
            DType::Float32 => Scalar::Float32(r.read_f32::<B>()?),
            DType::Float64 => Scalar::Float64(r.read_f64::<B>()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(s: &str) -> TypeDescriptor {
        TypeDescriptor::parse(s).unwrap()
    }

    #[test]
    fn test_read_little_endian_i32() {
        let data = [0x34, 0x12, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut cursor = ElementCursor::new(&data, descriptor("<i4")).unwrap();
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.read_scalar().unwrap(), Scalar::Int32(4660));
        assert_eq!(cursor.remaining(), 1);
        assert_eq!(cursor.read_scalar().unwrap(), Scalar::Int32(-1));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_read_big_endian_u16() {
        let data = [0x12, 0x34];
        let mut cursor = ElementCursor::new(&data, descriptor(">u2")).unwrap();
        assert_eq!(cursor.read_scalar().unwrap(), Scalar::UInt16(0x1234));
    }

    #[test]
    fn test_read_floats() {
        let mut data = 1.5f64.to_le_bytes().to_vec();
        data.extend_from_slice(&(-0.25f64).to_le_bytes());
        let values = ElementCursor::new(&data, descriptor("<f8"))
            .unwrap()
            .read_all()
            .unwrap();
        assert_eq!(values, vec![Scalar::Float64(1.5), Scalar::Float64(-0.25)]);

        let data = 0.5f32.to_be_bytes();
        let values = ElementCursor::new(&data, descriptor(">f4"))
            .unwrap()
            .read_all()
            .unwrap();
        assert_eq!(values, vec![Scalar::Float32(0.5)]);
    }

    #[test]
    fn test_read_bool_nonzero_is_true() {
        let data = [0, 1, 2];
        let values = ElementCursor::new(&data, descriptor("?"))
            .unwrap()
            .read_all()
            .unwrap();
        assert_eq!(
            values,
            vec![Scalar::Bool(false), Scalar::Bool(true), Scalar::Bool(true)]
        );
    }

    #[test]
    fn test_size_mismatch() {
        let data = [0u8; 7];
        let err = ElementCursor::new(&data, descriptor("<i4"))
            .err()
            .unwrap();
        assert_eq!(err, ConversionError::size_mismatch(7, 4));
    }

    #[test]
    fn test_empty_buffer() {
        let cursor = ElementCursor::new(&[], descriptor("<f8")).unwrap();
        assert!(cursor.is_empty());
        assert!(cursor.read_all().unwrap().is_empty());
    }
}
