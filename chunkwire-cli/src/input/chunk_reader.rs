//! Parsing chunk files written by `split`

use crate::error::CliError;
use anyhow::Result;
use chunkwire_core::Chunk;

/// Parse chunks from a JSON array or from JSON lines.
///
/// Blank lines are skipped in JSON lines input.
pub fn parse_chunks(content: &str) -> Result<Vec<Chunk>> {
    if content.trim_start().starts_with('[') {
        let chunks: Vec<Chunk> = serde_json::from_str(content)
            .map_err(|e| CliError::InvalidChunkInput(format!("JSON array: {e}")))?;
        return Ok(chunks);
    }

    let mut chunks = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let chunk: Chunk = serde_json::from_str(line)
            .map_err(|e| CliError::InvalidChunkInput(format!("line {}: {e}", index + 1)))?;
        chunks.push(chunk);
    }

    log::debug!("Parsed {} chunks", chunks.len());
    Ok(chunks)
}
