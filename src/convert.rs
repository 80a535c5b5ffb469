// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! One-shot conversion over byte streams.
//!
//! [`Converter::run`] is the only place that performs I/O: it reads the
//! request line, hands it to the pure [`decode`] function and writes exactly
//! one result line. Nothing is written unless every stage succeeded.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::core::{ConversionError, EncodedArray, NestedArray, Result};
use crate::encoding::{decode, OutputFormat};

/// Reads one encoded array, writes one rendered line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    format: OutputFormat,
}

impl Converter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Output format used by [`render`](Self::render) and [`run`](Self::run).
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Read the request record from the first line of `reader`.
    ///
    /// The rest of the stream is consumed and discarded.
    pub fn read_request<R: BufRead>(mut reader: R) -> Result<EncodedArray> {
        let mut line = Vec::new();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(ConversionError::parse("request", "no input line"));
        }

        let trailing = io::copy(&mut reader, &mut io::sink())?;
        if trailing > 0 {
            warn!(bytes = trailing, "ignoring input after the first line");
        }

        let line = String::from_utf8(line)
            .map_err(|e| ConversionError::parse("request", e.to_string()))?;
        let line = line.trim_end_matches(['\n', '\r']);
        debug!(len = line.len(), "request line read");

        EncodedArray::from_json(line)
    }

    /// Render a decoded array in the configured format.
    pub fn render(&self, array: &NestedArray) -> Result<String> {
        self.format.render(array)
    }

    /// Decode and render a request record.
    pub fn convert(&self, encoded: &EncodedArray) -> Result<String> {
        let array = decode(encoded)?;
        self.render(&array)
    }

    /// Decode and render a single JSON request line.
    pub fn convert_line(&self, line: &str) -> Result<String> {
        self.convert(&EncodedArray::from_json(line)?)
    }

    /// Run the whole pipeline: read, decode, reshape, render, write.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Result<()> {
        let encoded = Self::read_request(reader)?;
        let text = self.convert(&encoded)?;
        writeln!(writer, "{text}")?;
        writer.flush()?;
        debug!(format = %self.format, "result written");
        Ok(())
    }
}
