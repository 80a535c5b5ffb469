// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for ndcodec.
//!
//! One variant per failure class of the conversion pipeline:
//! - Request parsing
//! - Base64 payload decoding
//! - dtype resolution
//! - Element sizing and reshaping
//! - Output rendering

use std::fmt;

use super::dtype::DType;

/// Errors that can occur while converting an encoded array.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Malformed or missing request line, or missing required fields
    Parse {
        /// What was being parsed
        context: String,
        /// Error message
        message: String,
    },

    /// Payload is not valid base64
    Decode {
        /// Error message from the base64 engine
        message: String,
    },

    /// dtype identifier is not one of the supported element types
    UnsupportedType {
        /// The dtype string as received
        dtype: String,
    },

    /// Payload length is not a multiple of the element width
    SizeMismatch {
        /// Decoded payload length in bytes
        byte_len: usize,
        /// Width of one element in bytes
        element_size: usize,
    },

    /// Element count does not fit the requested shape
    ShapeMismatch {
        /// Shape as received
        shape: Vec<i64>,
        /// Number of decoded elements
        element_count: usize,
    },

    /// Value handed to the encoder does not match its dtype
    TypeMismatch {
        /// dtype the encoder was created for
        expected: DType,
        /// dtype of the offending value
        found: DType,
    },

    /// Serializing a record or a decoded array to text failed
    Render {
        /// What was being rendered
        context: String,
        /// Error message
        message: String,
    },

    /// Reading the request or writing the result failed
    Io {
        /// Error message
        message: String,
    },
}

impl ConversionError {
    /// Create a parse error.
    pub fn parse(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConversionError::Parse {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a base64 decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        ConversionError::Decode {
            message: message.into(),
        }
    }

    /// Create an unsupported dtype error.
    pub fn unsupported_type(dtype: impl Into<String>) -> Self {
        ConversionError::UnsupportedType {
            dtype: dtype.into(),
        }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(byte_len: usize, element_size: usize) -> Self {
        ConversionError::SizeMismatch {
            byte_len,
            element_size,
        }
    }

    /// Create a shape mismatch error.
    pub fn shape_mismatch(shape: &[i64], element_count: usize) -> Self {
        ConversionError::ShapeMismatch {
            shape: shape.to_vec(),
            element_count,
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: DType, found: DType) -> Self {
        ConversionError::TypeMismatch { expected, found }
    }

    /// Create a render error.
    pub fn render(context: impl Into<String>, message: impl Into<String>) -> Self {
        ConversionError::Render {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Name of the error class, as reported in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Parse { .. } => "ParseError",
            ConversionError::Decode { .. } => "DecodeError",
            ConversionError::UnsupportedType { .. } => "UnsupportedTypeError",
            ConversionError::SizeMismatch { .. } => "SizeMismatchError",
            ConversionError::ShapeMismatch { .. } => "ShapeMismatchError",
            ConversionError::TypeMismatch { .. } => "TypeMismatchError",
            ConversionError::Render { .. } => "RenderError",
            ConversionError::Io { .. } => "IoError",
        }
    }

    /// Pipeline stage at which the error was raised.
    pub fn stage(&self) -> &'static str {
        match self {
            ConversionError::Parse { .. } => "read",
            ConversionError::Decode { .. }
            | ConversionError::UnsupportedType { .. }
            | ConversionError::SizeMismatch { .. } => "decode",
            ConversionError::ShapeMismatch { .. } => "reshape",
            ConversionError::TypeMismatch { .. } => "encode",
            ConversionError::Render { .. } => "render",
            ConversionError::Io { .. } => "io",
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            ConversionError::Parse { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            ConversionError::Decode { message } => vec![("message", message.clone())],
            ConversionError::UnsupportedType { dtype } => vec![("dtype", dtype.clone())],
            ConversionError::SizeMismatch {
                byte_len,
                element_size,
            } => vec![
                ("byte_len", byte_len.to_string()),
                ("element_size", element_size.to_string()),
            ],
            ConversionError::ShapeMismatch {
                shape,
                element_count,
            } => vec![
                ("shape", format!("{shape:?}")),
                ("element_count", element_count.to_string()),
            ],
            ConversionError::TypeMismatch { expected, found } => vec![
                ("expected", expected.to_string()),
                ("found", found.to_string()),
            ],
            ConversionError::Render { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            ConversionError::Io { message } => vec![("message", message.clone())],
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Parse { context, message } => {
                write!(f, "Parse error in {context}: {message}")
            }
            ConversionError::Decode { message } => {
                write!(f, "Invalid base64 payload: {message}")
            }
            ConversionError::UnsupportedType { dtype } => {
                write!(f, "Unsupported dtype: '{dtype}'")
            }
            ConversionError::SizeMismatch {
                byte_len,
                element_size,
            } => write!(
                f,
                "Payload of {byte_len} bytes is not a multiple of the element size {element_size}"
            ),
            ConversionError::ShapeMismatch {
                shape,
                element_count,
            } => write!(
                f,
                "Cannot reshape {element_count} elements into shape {shape:?}"
            ),
            ConversionError::TypeMismatch { expected, found } => {
                write!(f, "Value of type {found} does not match dtype {expected}")
            }
            ConversionError::Render { context, message } => {
                write!(f, "Failed to render {context}: {message}")
            }
            ConversionError::Io { message } => write!(f, "I/O error: {message}"),
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::Io {
            message: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for ConversionError {
    fn from(err: base64::DecodeError) -> Self {
        ConversionError::decode(err.to_string())
    }
}

/// Result type for ndcodec operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
