//! Binary-safe strategy: message bytes in a chosen charset, then radix-64

use super::EncodingStrategy;
use crate::error::{ChunkError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use encoding_rs::Encoding;

/// Base64 over the message's bytes in a configurable character encoding.
///
/// The output alphabet is `A-Z a-z 0-9 + / =`, so the encoded form can be cut
/// at any byte offset.
#[derive(Debug, Clone, Copy)]
pub struct Base64Encoding {
    charset: &'static Encoding,
}

impl Base64Encoding {
    /// Strategy over UTF-8 bytes
    pub fn new() -> Self {
        Self {
            charset: encoding_rs::UTF_8,
        }
    }

    /// Strategy over bytes in the charset named by a WHATWG label
    /// (`"utf-8"`, `"latin1"`, `"shift_jis"`, ...).
    ///
    /// Labels that resolve to an encoding `encoding_rs` can only decode
    /// (UTF-16 variants, `replacement`) are rejected.
    pub fn with_charset(label: &str) -> Result<Self> {
        let charset = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
            ChunkError::config(format!("unknown character encoding '{label}'"))
        })?;

        if charset.output_encoding() != charset {
            return Err(ChunkError::config(format!(
                "character encoding '{}' is decode-only and cannot be used to encode messages",
                charset.name()
            )));
        }

        Ok(Self { charset })
    }

    /// Canonical name of the bound charset
    pub fn charset(&self) -> &'static str {
        self.charset.name()
    }
}

impl Default for Base64Encoding {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodingStrategy for Base64Encoding {
    fn encode(&self, message: &str) -> Result<String> {
        let (bytes, _, unmappable) = self.charset.encode(message);
        if unmappable {
            return Err(ChunkError::Encode {
                strategy: self.name(),
                reason: format!(
                    "message contains characters not representable in {}",
                    self.charset.name()
                ),
            });
        }
        Ok(STANDARD.encode(bytes))
    }

    fn decode(&self, encoded: &str) -> Result<String> {
        let bytes = STANDARD.decode(encoded).map_err(|e| ChunkError::Decode {
            strategy: self.name(),
            reason: e.to_string(),
        })?;

        self.charset
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| ChunkError::Decode {
                strategy: self.name(),
                reason: format!("payload is not valid {}", self.charset.name()),
            })
    }

    fn name(&self) -> &'static str {
        "base64"
    }

    fn slice_safe(&self) -> bool {
        true
    }
}
