// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # ndcodec
//!
//! Converter for base64-encoded numeric arrays.
//!
//! A request is one JSON record carrying the packed element bytes under
//! `__ndarray__`, a numpy-style `dtype` and an optional `shape`. The library
//! turns it into a nested list of scalars and renders that as text:
//! - **Core types** in [`core`](crate::core) module
//! - **Decoding, encoding and rendering** in [`encoding`](crate::encoding) module
//! - **Stream conversion** in [`convert`](crate::convert) module
//!
//! ## Example: Decoding a record
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndcodec::{decode, to_list_literal, EncodedArray};
//!
//! let line = r#"{"__ndarray__": "AQAAAAIAAAADAAAABAAAAA==", "dtype": "<i4", "shape": [2,2]}"#;
//! let array = decode(&EncodedArray::from_json(line)?)?;
//! assert_eq!(to_list_literal(&array), "[[1, 2], [3, 4]]");
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: Converting a stream
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ndcodec::{Converter, OutputFormat};
//!
//! let input = br#"{"__ndarray__": "AQID", "dtype": "|u1"}"#;
//! let mut output = Vec::new();
//! Converter::new(OutputFormat::Python).run(&input[..], &mut output)?;
//! assert_eq!(output, b"[1, 2, 3]\n");
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use self::core::{
    ByteOrder, ConversionError, DType, EncodedArray, NestedArray, Result, Scalar, TypeDescriptor,
};

// Encoding/decoding
pub mod encoding;

pub use encoding::{decode, encode, to_json, to_list_literal, ArrayEncoder, OutputFormat};

// Stream conversion
pub mod convert;

pub use convert::Converter;
