// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Array encoding/decoding implementations.
//!
//! - [`cursor`] - Typed element reads over a payload buffer
//! - [`decoder`] - Request record to nested array
//! - [`encoder`] - Scalars to request record
//! - [`render`] - Nested array to output text

pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod render;

pub use cursor::ElementCursor;
pub use decoder::{decode, decode_elements, reshape, MAX_DIMS};
pub use encoder::{encode, ArrayEncoder};
pub use render::{format_float, to_json, to_list_literal, OutputFormat, ParseFormatError};
