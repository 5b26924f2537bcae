//! Producer configuration

use crate::encoding::{EncodingKind, EncodingStrategy};
use crate::error::{ChunkError, Result};
use std::str::FromStr;
use std::sync::Arc;

/// Default configuration constants
pub mod defaults {
    use crate::encoding::EncodingKind;

    /// Default chunk size in bytes (1MiB, a typical broker record limit)
    pub const CHUNK_SIZE: usize = 1024 * 1024;

    /// Default character encoding for the binary-safe strategy
    pub const CHARACTER_ENCODING: &str = "utf-8";

    /// Default strategy
    pub const ENCODING: EncodingKind = EncodingKind::Base64;
}

/// How messages are encoded and split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerConfig {
    pub(crate) chunk_size: usize, // in bytes
    pub(crate) encoding: EncodingKind,
    pub(crate) character_encoding: String,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            encoding: defaults::ENCODING,
            character_encoding: defaults::CHARACTER_ENCODING.to_string(),
        }
    }
}

impl ProducerConfig {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Maximum size of one chunk's data in bytes
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Selected strategy
    pub fn encoding(&self) -> EncodingKind {
        self.encoding
    }

    /// Character encoding label used by the binary-safe strategy
    pub fn character_encoding(&self) -> &str {
        &self.character_encoding
    }

    /// Instantiate the selected strategy
    pub fn build_strategy(&self) -> Result<Arc<dyn EncodingStrategy>> {
        self.encoding.build(&self.character_encoding)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkError::config("chunk_size must be greater than 0"));
        }

        if self.encoding == EncodingKind::Base64 {
            // Surfaces unknown or decode-only charsets before any message is seen
            self.build_strategy()?;
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    chunk_size: Option<usize>,
    encoding: Option<String>,
    character_encoding: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chunk size in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = Some(bytes);
        self
    }

    /// Set the strategy by name (`"base64"`, `"escaped-json"`)
    pub fn encoding(mut self, name: impl Into<String>) -> Self {
        self.encoding = Some(name.into());
        self
    }

    /// Set the character encoding label for the binary-safe strategy
    pub fn character_encoding(mut self, label: impl Into<String>) -> Self {
        self.character_encoding = Some(label.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ProducerConfig> {
        let mut config = ProducerConfig::default();

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }

        if let Some(name) = self.encoding {
            config.encoding = EncodingKind::from_str(&name)?;
        }

        if let Some(label) = self.character_encoding {
            config.character_encoding = label;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProducerConfig::default();
        assert_eq!(config.chunk_size(), 1024 * 1024);
        assert_eq!(config.encoding(), EncodingKind::Base64);
        assert_eq!(config.character_encoding(), "utf-8");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ProducerConfig::builder()
            .chunk_size(4)
            .encoding("escaped-json")
            .character_encoding("latin1")
            .build()
            .unwrap();

        assert_eq!(config.chunk_size(), 4);
        assert_eq!(config.encoding(), EncodingKind::EscapedJson);
        assert_eq!(config.character_encoding(), "latin1");
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let err = ProducerConfig::builder().chunk_size(0).build().unwrap_err();
        assert!(matches!(err, ChunkError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let result = ProducerConfig::builder().encoding("uuencode").build();
        assert!(matches!(
            result,
            Err(ChunkError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_unknown_charset_rejected_for_base64() {
        let result = ProducerConfig::builder()
            .character_encoding("no-such-charset")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_charset_ignored_for_escaped_json() {
        let config = ProducerConfig::builder()
            .encoding("json")
            .character_encoding("no-such-charset")
            .build()
            .unwrap();
        assert_eq!(config.build_strategy().unwrap().name(), "escaped-json");
    }
}
