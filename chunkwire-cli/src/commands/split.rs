//! Split command implementation

use super::{open_output, EncodingArg};
use crate::config::{ChunkingOverrides, CliConfig};
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, OutputFormat};
use anyhow::{Context, Result};
use chunkwire_core::ChunkProducer;
use clap::Args;
use std::path::PathBuf;
use uuid::Uuid;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Message file to split
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Maximum bytes of encoded data per chunk
    #[arg(short = 's', long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Encoding strategy
    #[arg(short, long, value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Character encoding for the base64 strategy
    #[arg(long, value_name = "LABEL")]
    pub charset: Option<String>,

    /// Message identifier (default: random UUID)
    #[arg(short, long, value_name = "ID")]
    pub message_id: Option<String>,

    /// Chunk output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CHUNKWIRE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reassemble the produced chunks and fail unless they match the input
    #[arg(long)]
    pub verify: bool,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        log::info!("Splitting {}", self.input.display());
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let producer_config = cli_config.producer_config(&self.overrides())?;
        let format = cli_config.output_format(self.format)?;

        let message = FileReader::read_text(&self.input)?;
        let message_id = self
            .message_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let producer = ChunkProducer::from_config(&message, message_id, &producer_config)
            .with_context(|| format!("Failed to split {}", self.input.display()))?;
        log::info!("{producer}");

        if self.verify {
            let restored = producer
                .reassemble(producer.chunks())
                .context("Failed to reassemble produced chunks")?;
            if restored != message {
                return Err(CliError::RoundTripMismatch(producer.message_id().to_string()).into());
            }
            log::info!("Verified round trip of message '{}'", producer.message_id());
        }

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = create_formatter(format, cli_config.output.pretty_json, writer);
        for chunk in producer.chunks() {
            formatter.write_chunk(&chunk)?;
        }
        formatter.finish()?;

        log::info!(
            "Wrote {} chunks for message '{}'",
            producer.chunk_total(),
            producer.message_id()
        );
        Ok(())
    }

    fn overrides(&self) -> ChunkingOverrides {
        ChunkingOverrides {
            chunk_size: self.chunk_size,
            encoding: self.encoding.map(|e| e.as_str().to_string()),
            character_encoding: self.charset.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> SplitArgs {
        SplitArgs {
            input: PathBuf::from(input),
            output: None,
            chunk_size: None,
            encoding: None,
            charset: None,
            message_id: None,
            format: None,
            config: None,
            verify: false,
        }
    }

    #[test]
    fn test_overrides_only_carry_given_flags() {
        let overrides = args("in.txt").overrides();
        assert!(overrides.chunk_size.is_none());
        assert!(overrides.encoding.is_none());
        assert!(overrides.character_encoding.is_none());
    }

    #[test]
    fn test_overrides_from_flags() {
        let mut split = args("in.txt");
        split.chunk_size = Some(16);
        split.encoding = Some(EncodingArg::EscapedJson);
        split.charset = Some("latin1".to_string());

        let overrides = split.overrides();
        assert_eq!(overrides.chunk_size, Some(16));
        assert_eq!(overrides.encoding.as_deref(), Some("escaped-json"));
        assert_eq!(overrides.character_encoding.as_deref(), Some("latin1"));
    }

    #[test]
    fn test_missing_input_fails() {
        let err = args("/nonexistent/message.json").execute().unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_split_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let input = temp_dir.path().join("message.txt");
        let output = temp_dir.path().join("chunks.jsonl");
        std::fs::write(&input, "hello world").unwrap();

        let mut split = args(input.to_str().unwrap());
        split.output = Some(output.clone());
        split.chunk_size = Some(4);
        split.message_id = Some("fixed".to_string());
        split.verify = true;
        split.execute().unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 4);
        assert!(written.contains(r#""chunk_data":"aGVs""#));
        assert!(written.contains(r#""message_id":"fixed""#));
    }
}
