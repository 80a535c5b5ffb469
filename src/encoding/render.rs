// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Text renderers for decoded arrays.
//!
//! - [`OutputFormat::Python`] writes a nested-list literal, `[[1, 2], [3, 4]]`
//! - [`OutputFormat::Json`] writes compact JSON, `[[1,2],[3,4]]`
//!
//! Float rendering in the list literal is fixed rather than left to a
//! runtime default: the shortest decimal that round-trips the value as an
//! `f64` (float32 elements are widened first), in fixed notation when the
//! decimal exponent is in `-4..16` and exponential notation (`1e-05`,
//! `1.5e+16`) otherwise.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::core::{ConversionError, NestedArray, Result, Scalar};

/// Output renderer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Nested-list literal
    #[default]
    Python,
    /// Compact JSON
    Json,
}

impl OutputFormat {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Python => "python",
            OutputFormat::Json => "json",
        }
    }

    /// Render `array` in this format.
    pub fn render(&self, array: &NestedArray) -> Result<String> {
        match self {
            OutputFormat::Python => Ok(to_list_literal(array)),
            OutputFormat::Json => to_json(array),
        }
    }
}

/// Error returned when parsing an `OutputFormat` from string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFormatError {
    _private: (),
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid output format, expected 'python' or 'json'")
    }
}

impl std::error::Error for ParseFormatError {}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" => Ok(OutputFormat::Python),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseFormatError { _private: () }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render as a nested-list literal with `, ` separators.
pub fn to_list_literal(array: &NestedArray) -> String {
    let mut out = String::with_capacity(array.element_count() * 4 + 2);
    write_node(&mut out, array);
    out
}

/// Render as compact JSON. Non-finite floats become `null`.
pub fn to_json(array: &NestedArray) -> Result<String> {
    serde_json::to_string(array)
        .map_err(|e| ConversionError::render("json output", e.to_string()))
}

fn write_node(out: &mut String, node: &NestedArray) {
    match node {
        NestedArray::Scalar(value) => write_scalar(out, value),
        NestedArray::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_node(out, item);
            }
            out.push(']');
        }
    }
}

fn write_scalar(out: &mut String, value: &Scalar) {
    match value {
        Scalar::Bool(true) => out.push_str("True"),
        Scalar::Bool(false) => out.push_str("False"),
        Scalar::Float32(v) => write_float(out, f64::from(*v)),
        Scalar::Float64(v) => write_float(out, *v),
        // Integers: Display is plain decimal; writing to a String cannot fail
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

/// Shortest round-trip rendering of an `f64`.
pub fn format_float(v: f64) -> String {
    let mut out = String::new();
    write_float(&mut out, v);
    out
}

fn write_float(out: &mut String, v: f64) {
    if v.is_nan() {
        out.push_str("nan");
        return;
    }
    if v.is_infinite() {
        out.push_str(if v > 0.0 { "inf" } else { "-inf" });
        return;
    }

    // `{:e}` yields the shortest round-trip digits, e.g. "-1.25e-7"
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        out.push_str(&sci);
        return;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        out.push_str(&sci);
        return;
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if negative {
        out.push('-');
    }

    if (-4..16).contains(&exp) {
        if exp >= 0 {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.push_str(&"0".repeat(int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.push_str(&"0".repeat((-exp - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        let _ = write!(out, "e{sign}{:02}", exp.abs());
    }
}
