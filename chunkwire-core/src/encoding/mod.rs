//! Encoding strategies
//!
//! A strategy turns a native text message into a transport-safe textual form
//! and back. The chunk producer slices that form at byte offsets, so every
//! strategy must emit ASCII only.
//!
//! Two strategies exist:
//! - [`Base64Encoding`]: binary-safe. Every output byte is a self-contained
//!   symbol, so any cut point is safe.
//! - [`EscapedJsonEncoding`]: a JSON string literal. A cut can land inside a
//!   `\uXXXX` escape, so chunks must be fully reassembled before decoding.

mod binary_safe;
mod escaped_json;

pub use binary_safe::Base64Encoding;
pub use escaped_json::EscapedJsonEncoding;

use crate::error::{ChunkError, Result};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Converts messages to and from their transport-safe form
pub trait EncodingStrategy: Send + Sync + fmt::Debug {
    /// Encode a message. The output must be ASCII.
    fn encode(&self, message: &str) -> Result<String>;

    /// Exact inverse of [`encode`](Self::encode)
    fn decode(&self, encoded: &str) -> Result<String>;

    /// Strategy name for logs and error messages
    fn name(&self) -> &'static str;

    /// Whether every byte offset of the encoded form is a symbol boundary.
    ///
    /// When false, a single chunk cannot be decoded on its own.
    fn slice_safe(&self) -> bool {
        false
    }
}

/// The closed set of available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncodingKind {
    /// Radix-64 over the message bytes
    #[default]
    Base64,
    /// JSON string literal with non-ASCII escaped
    EscapedJson,
}

impl EncodingKind {
    /// All strategies, in display order
    pub const ALL: [EncodingKind; 2] = [EncodingKind::Base64, EncodingKind::EscapedJson];

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingKind::Base64 => "base64",
            EncodingKind::EscapedJson => "escaped-json",
        }
    }

    /// Build the strategy. `character_encoding` only affects [`EncodingKind::Base64`].
    pub fn build(&self, character_encoding: &str) -> Result<Arc<dyn EncodingStrategy>> {
        Ok(match self {
            EncodingKind::Base64 => Arc::new(Base64Encoding::with_charset(character_encoding)?),
            EncodingKind::EscapedJson => Arc::new(EscapedJsonEncoding::new()),
        })
    }
}

impl fmt::Display for EncodingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingKind {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base64" | "b64" => Ok(EncodingKind::Base64),
            "escaped-json" | "escaped_json" | "json" => Ok(EncodingKind::EscapedJson),
            other => Err(ChunkError::config(format!(
                "unknown encoding strategy '{other}' (expected one of: base64, escaped-json)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("base64".parse::<EncodingKind>().unwrap(), EncodingKind::Base64);
        assert_eq!(" BASE64 ".parse::<EncodingKind>().unwrap(), EncodingKind::Base64);
        assert_eq!(
            "escaped-json".parse::<EncodingKind>().unwrap(),
            EncodingKind::EscapedJson
        );
        assert_eq!("json".parse::<EncodingKind>().unwrap(), EncodingKind::EscapedJson);
    }

    #[test]
    fn test_kind_from_str_unknown() {
        let err = "rot13".parse::<EncodingKind>().unwrap_err();
        assert!(matches!(err, ChunkError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("rot13"));
    }

    #[test]
    fn test_kind_display_round_trips() {
        for kind in EncodingKind::ALL {
            assert_eq!(kind.to_string().parse::<EncodingKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_build_selects_strategy() {
        let b64 = EncodingKind::Base64.build("utf-8").unwrap();
        assert_eq!(b64.name(), "base64");
        assert!(b64.slice_safe());

        let json = EncodingKind::EscapedJson.build("ignored").unwrap();
        assert_eq!(json.name(), "escaped-json");
        assert!(!json.slice_safe());
    }

    #[test]
    fn test_build_rejects_unknown_charset() {
        let err = EncodingKind::Base64.build("klingon").unwrap_err();
        assert!(matches!(err, ChunkError::InvalidConfiguration { .. }));
    }
}
