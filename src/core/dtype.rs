// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Element type identifiers.
//!
//! dtype strings follow the numpy array-protocol conventions: an optional
//! byte-order character followed by a type code (`<i4`, `>f8`, `|u1`, `?`),
//! or a plain type name (`int32`, `float64`).

use std::fmt;
use std::str::FromStr;

use super::error::{ConversionError, Result};

/// Fixed-width element types an encoded array can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// Boolean stored in one byte
    Bool,
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 8-bit unsigned integer
    UInt8,
    /// 16-bit unsigned integer
    UInt16,
    /// 32-bit unsigned integer
    UInt32,
    /// 64-bit unsigned integer
    UInt64,
    /// IEEE 754 single precision
    Float32,
    /// IEEE 754 double precision
    Float64,
}

impl DType {
    /// All supported element types.
    pub const ALL: [DType; 11] = [
        DType::Bool,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::UInt8,
        DType::UInt16,
        DType::UInt32,
        DType::UInt64,
        DType::Float32,
        DType::Float64,
    ];

    /// Size of a single element in bytes.
    pub const fn size(self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 => 8,
        }
    }

    /// Little-endian array-protocol code, e.g. `<i4`.
    pub const fn numpy_descr(self) -> &'static str {
        match self {
            DType::Bool => "|b1",
            DType::Int8 => "|i1",
            DType::Int16 => "<i2",
            DType::Int32 => "<i4",
            DType::Int64 => "<i8",
            DType::UInt8 => "|u1",
            DType::UInt16 => "<u2",
            DType::UInt32 => "<u4",
            DType::UInt64 => "<u8",
            DType::Float32 => "<f4",
            DType::Float64 => "<f8",
        }
    }

    /// Resolve a type name such as `int32` or `double`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(DType::Bool),
            "int8" | "byte" => Some(DType::Int8),
            "int16" => Some(DType::Int16),
            "int32" => Some(DType::Int32),
            "int64" | "int" => Some(DType::Int64),
            "uint8" | "ubyte" => Some(DType::UInt8),
            "uint16" => Some(DType::UInt16),
            "uint32" => Some(DType::UInt32),
            "uint64" => Some(DType::UInt64),
            "float32" | "single" => Some(DType::Float32),
            "float64" | "float" | "double" => Some(DType::Float64),
            _ => None,
        }
    }

    /// Resolve a type code such as `i4`, `f8` or `H`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "?" | "b1" => Some(DType::Bool),
            "b" | "i1" => Some(DType::Int8),
            "h" | "i2" => Some(DType::Int16),
            "i" | "i4" => Some(DType::Int32),
            "l" | "q" | "i8" => Some(DType::Int64),
            "B" | "u1" => Some(DType::UInt8),
            "H" | "u2" => Some(DType::UInt16),
            "I" | "u4" => Some(DType::UInt32),
            "L" | "Q" | "u8" => Some(DType::UInt64),
            "f" | "f4" => Some(DType::Float32),
            "d" | "f8" => Some(DType::Float64),
            _ => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        };
        write!(f, "{name}")
    }
}

/// Byte order of multi-byte elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

impl ByteOrder {
    /// Byte order of the host.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Map an array-protocol prefix character to a byte order.
    fn from_prefix(c: char) -> Option<Self> {
        match c {
            '<' => Some(ByteOrder::Little),
            '>' | '!' => Some(ByteOrder::Big),
            '=' | '|' => Some(ByteOrder::native()),
            _ => None,
        }
    }

    /// Array-protocol prefix character.
    pub const fn prefix(self) -> char {
        match self {
            ByteOrder::Little => '<',
            ByteOrder::Big => '>',
        }
    }
}

/// A resolved dtype string: element type plus byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub dtype: DType,
    pub byte_order: ByteOrder,
}

impl TypeDescriptor {
    pub fn new(dtype: DType, byte_order: ByteOrder) -> Self {
        Self { dtype, byte_order }
    }

    /// Width of one element in bytes.
    pub fn element_size(&self) -> usize {
        self.dtype.size()
    }

    /// Parse a dtype string, rejecting anything outside the closed set.
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        if let Some(order) = chars.next().and_then(ByteOrder::from_prefix) {
            // A prefix only qualifies a type code, never a type name
            return DType::from_code(chars.as_str())
                .map(|dtype| Self::new(dtype, order))
                .ok_or_else(|| ConversionError::unsupported_type(s));
        }

        DType::from_code(s)
            .or_else(|| DType::from_name(s))
            .map(|dtype| Self::new(dtype, ByteOrder::native()))
            .ok_or_else(|| ConversionError::unsupported_type(s))
    }
}

impl FromStr for TypeDescriptor {
    type Err = ConversionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = &self.dtype.numpy_descr()[1..];
        if self.dtype.size() == 1 {
            write!(f, "|{code}")
        } else {
            write!(f, "{}{code}", self.byte_order.prefix())
        }
    }
}
