//! Escaping strategy: the message as a single JSON string literal

use super::EncodingStrategy;
use crate::error::{ChunkError, Result};
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Encodes a message as a quoted JSON string literal.
///
/// Non-ASCII code points are written as `\uXXXX` escapes (surrogate pairs
/// above the BMP), so the output is pure ASCII and its byte length equals its
/// character count. A chunk boundary may still split an escape sequence;
/// decode only the fully reassembled text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapedJsonEncoding;

impl EscapedJsonEncoding {
    /// Create the strategy
    pub fn new() -> Self {
        Self
    }
}

impl EncodingStrategy for EscapedJsonEncoding {
    fn encode(&self, message: &str) -> Result<String> {
        let mut out = Vec::with_capacity(message.len() + 2);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, AsciiFormatter);
        message
            .serialize(&mut serializer)
            .map_err(|e| ChunkError::Encode {
                strategy: self.name(),
                reason: e.to_string(),
            })?;

        String::from_utf8(out).map_err(|e| ChunkError::Encode {
            strategy: self.name(),
            reason: e.to_string(),
        })
    }

    fn decode(&self, encoded: &str) -> Result<String> {
        serde_json::from_str::<String>(encoded).map_err(|e| ChunkError::Decode {
            strategy: self.name(),
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "escaped-json"
    }
}

/// Compact JSON output with every non-ASCII character escaped.
///
/// All other `Formatter` methods keep their compact defaults.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut run_start = 0;
        for (idx, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[run_start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            run_start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[run_start..])
    }
}
