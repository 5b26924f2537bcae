//! JSON lines output formatter

use super::ChunkFormatter;
use anyhow::Result;
use chunkwire_core::Chunk;
use std::io::Write;

/// Writes each chunk as a compact JSON object on its own line
pub struct JsonLinesFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesFormatter<W> {
    /// Create a new JSON lines formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> ChunkFormatter for JsonLinesFormatter<W> {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        serde_json::to_writer(&mut self.writer, chunk)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
