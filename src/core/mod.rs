// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout ndcodec.
//!
//! This module provides the foundational types for the library:
//! - [`ConversionError`] - Error taxonomy of the conversion pipeline
//! - [`DType`] / [`TypeDescriptor`] - Closed set of element types
//! - [`Scalar`] - Single decoded element
//! - [`EncodedArray`] / [`NestedArray`] - Input record and decoded structure

pub mod array;
pub mod dtype;
pub mod error;
pub mod value;

pub use array::{EncodedArray, NestedArray};
pub use dtype::{ByteOrder, DType, TypeDescriptor};
pub use error::{ConversionError, Result};
pub use value::Scalar;
