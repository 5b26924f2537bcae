//! Output formatting module

use anyhow::Result;
use chunkwire_core::Chunk;
use std::io::Write;

/// Trait for chunk output formatters
pub trait ChunkFormatter: Send + Sync {
    /// Format and output a single chunk
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod jsonl;

pub use json::JsonFormatter;
pub use jsonl::JsonLinesFormatter;

/// Supported chunk output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of chunks
    Json,
    /// One JSON chunk object per line
    Jsonl,
}

/// Create the formatter for `format` writing into `writer`
pub fn create_formatter<W>(format: OutputFormat, pretty: bool, writer: W) -> Box<dyn ChunkFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        OutputFormat::Jsonl => Box::new(JsonLinesFormatter::new(writer)),
    }
}
