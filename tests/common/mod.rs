// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use base64::{engine::general_purpose, Engine as _};
use ndcodec::{DType, Scalar};

// ============================================================================
// Request Builders
// ============================================================================

/// Build a request line from raw bytes.
pub fn request_line(bytes: &[u8], dtype: &str, shape: Option<&[i64]>) -> String {
    let data = general_purpose::STANDARD.encode(bytes);
    let request = match shape {
        Some(shape) => serde_json::json!({ "__ndarray__": data, "dtype": dtype, "shape": shape }),
        None => serde_json::json!({ "__ndarray__": data, "dtype": dtype }),
    };
    request.to_string()
}

/// Little-endian int32 payload.
pub fn i32_le_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

// ============================================================================
// Sample Values
// ============================================================================

/// A handful of representative values of `dtype`, including its extremes.
pub fn sample_values(dtype: DType) -> Vec<Scalar> {
    match dtype {
        DType::Bool => vec![Scalar::Bool(true), Scalar::Bool(false), Scalar::Bool(true)],
        DType::Int8 => vec![Scalar::Int8(i8::MIN), Scalar::Int8(0), Scalar::Int8(i8::MAX)],
        DType::Int16 => vec![Scalar::Int16(i16::MIN), Scalar::Int16(-2), Scalar::Int16(i16::MAX)],
        DType::Int32 => vec![Scalar::Int32(i32::MIN), Scalar::Int32(7), Scalar::Int32(i32::MAX)],
        DType::Int64 => vec![Scalar::Int64(i64::MIN), Scalar::Int64(-1), Scalar::Int64(i64::MAX)],
        DType::UInt8 => vec![Scalar::UInt8(0), Scalar::UInt8(128), Scalar::UInt8(u8::MAX)],
        DType::UInt16 => vec![Scalar::UInt16(0), Scalar::UInt16(258), Scalar::UInt16(u16::MAX)],
        DType::UInt32 => vec![Scalar::UInt32(0), Scalar::UInt32(1 << 31), Scalar::UInt32(u32::MAX)],
        DType::UInt64 => vec![Scalar::UInt64(0), Scalar::UInt64(1 << 63), Scalar::UInt64(u64::MAX)],
        DType::Float32 => vec![
            Scalar::Float32(-0.0),
            Scalar::Float32(f32::MIN_POSITIVE),
            Scalar::Float32(f32::MAX),
        ],
        DType::Float64 => vec![
            Scalar::Float64(0.1),
            Scalar::Float64(-1e300),
            Scalar::Float64(f64::EPSILON),
        ],
    }
}

/// Bit-exact comparison of scalar sequences (floats compared by bits).
pub fn assert_bit_identical(actual: &[Scalar], expected: &[Scalar]) {
    assert_eq!(actual.len(), expected.len(), "element count differs");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (Scalar::Float32(a), Scalar::Float32(e)) => {
                assert_eq!(a.to_bits(), e.to_bits(), "element {i}")
            }
            (Scalar::Float64(a), Scalar::Float64(e)) => {
                assert_eq!(a.to_bits(), e.to_bits(), "element {i}")
            }
            _ => assert_eq!(a, e, "element {i}"),
        }
    }
}
