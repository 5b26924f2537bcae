//! Join command implementation

use super::{open_output, EncodingArg};
use crate::config::{ChunkingOverrides, CliConfig};
use crate::input::{parse_chunks, FileReader};
use anyhow::{Context, Result};
use chunkwire_core::Reassembler;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the join command
#[derive(Debug, Args)]
pub struct JoinArgs {
    /// Chunk file (JSON array or JSON lines)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file for the message (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Encoding strategy the chunks were produced with
    #[arg(short, long, value_enum)]
    pub encoding: Option<EncodingArg>,

    /// Character encoding for the base64 strategy
    #[arg(long, value_name = "LABEL")]
    pub charset: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CHUNKWIRE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl JoinArgs {
    /// Execute the join command
    pub fn execute(&self) -> Result<()> {
        log::info!("Joining chunks from {}", self.input.display());
        log::debug!("Arguments: {:?}", self);

        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;
        let overrides = ChunkingOverrides {
            chunk_size: None,
            encoding: self.encoding.map(|e| e.as_str().to_string()),
            character_encoding: self.charset.clone(),
        };
        let reassembler = Reassembler::from_config(&cli_config.producer_config(&overrides)?)?;

        let content = FileReader::read_text(&self.input)?;
        let chunks = parse_chunks(&content)?;
        log::info!(
            "Read {} chunks, decoding with {}",
            chunks.len(),
            reassembler.strategy().name()
        );

        let message = reassembler
            .reassemble(&chunks)
            .with_context(|| format!("Failed to reassemble {}", self.input.display()))?;

        let mut writer = open_output(self.output.as_deref())?;
        writer.write_all(message.as_bytes())?;
        writer.flush()?;

        log::info!("Wrote {} bytes", message.len());
        Ok(())
    }
}
