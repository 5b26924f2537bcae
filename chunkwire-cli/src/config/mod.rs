//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use chunkwire_core::{defaults, ProducerConfig};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Chunking-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum bytes of encoded data per chunk
    pub chunk_size: usize,

    /// Encoding strategy name
    pub encoding: String,

    /// Character encoding used by the base64 strategy
    pub character_encoding: String,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            encoding: defaults::ENCODING.as_str().to_string(),
            character_encoding: defaults::CHARACTER_ENCODING.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Chunk output format (`json` or `jsonl`)
    pub format: String,

    /// Pretty print JSON array output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "jsonl".to_string(),
            pretty_json: true,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default, Clone)]
pub struct ChunkingOverrides {
    /// `--chunk-size`
    pub chunk_size: Option<usize>,
    /// `--encoding`
    pub encoding: Option<String>,
    /// `--charset`
    pub character_encoding: Option<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the file if one was given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Merge overrides onto the file values and validate the result
    pub fn producer_config(&self, overrides: &ChunkingOverrides) -> Result<ProducerConfig> {
        let chunking = &self.chunking;

        ProducerConfig::builder()
            .chunk_size(overrides.chunk_size.unwrap_or(chunking.chunk_size))
            .encoding(
                overrides
                    .encoding
                    .clone()
                    .unwrap_or_else(|| chunking.encoding.clone()),
            )
            .character_encoding(
                overrides
                    .character_encoding
                    .clone()
                    .unwrap_or_else(|| chunking.character_encoding.clone()),
            )
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Output format from the file, unless overridden
    pub fn output_format(&self, overridden: Option<OutputFormat>) -> Result<OutputFormat> {
        if let Some(format) = overridden {
            return Ok(format);
        }

        OutputFormat::from_str(&self.output.format, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{}'", self.output.format))
                .into()
        })
    }

    /// Commented TOML template with the default values
    pub fn template() -> String {
        let defaults = Self::default();
        format!(
            r#"# Chunkwire configuration
#
# Command-line flags override values in this file.

[chunking]
# Maximum bytes of encoded data per chunk
chunk_size = {chunk_size}

# "base64" (binary-safe, chunks decodable alone when chunk_size is a
# multiple of 4) or "escaped-json" (ASCII JSON string literal)
encoding = "{encoding}"

# Character encoding the base64 strategy converts text through
character_encoding = "{character_encoding}"

[output]
# "jsonl" (one chunk per line) or "json" (array)
format = "{format}"

# Pretty print the "json" format
pretty_json = {pretty_json}
"#,
            chunk_size = defaults.chunking.chunk_size,
            encoding = defaults.chunking.encoding,
            character_encoding = defaults.chunking.character_encoding,
            format = defaults.output.format,
            pretty_json = defaults.output.pretty_json,
        )
    }
}
