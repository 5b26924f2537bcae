//! JSON output formatter

use super::ChunkFormatter;
use anyhow::Result;
use chunkwire_core::Chunk;
use std::io::Write;

/// JSON formatter - streams chunks as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    started: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            started: false,
        }
    }
}

impl<W: Write + Send + Sync> ChunkFormatter for JsonFormatter<W> {
    fn write_chunk(&mut self, chunk: &Chunk) -> Result<()> {
        let separator = match (self.started, self.pretty) {
            (false, false) => "[",
            (false, true) => "[\n  ",
            (true, false) => ",",
            (true, true) => ",\n  ",
        };
        self.writer.write_all(separator.as_bytes())?;
        self.started = true;

        if self.pretty {
            // Escaped JSON strings never contain raw newlines
            let element = serde_json::to_string_pretty(chunk)?;
            self.writer.write_all(element.replace('\n', "\n  ").as_bytes())?;
        } else {
            serde_json::to_writer(&mut self.writer, chunk)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let close = match (self.started, self.pretty) {
            (false, _) => "[]",
            (true, false) => "]",
            (true, true) => "\n]",
        };
        writeln!(self.writer, "{close}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(chunks: &[Chunk], pretty: bool) -> String {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty);
            for chunk in chunks {
                formatter.write_chunk(chunk).unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_compact_array() {
        let out = render(&[Chunk::new("m", 0, 1, "aGk=")], false);
        assert_eq!(
            out,
            "[{\"message_id\":\"m\",\"chunk_position\":0,\"chunk_total\":1,\"chunk_data\":\"aGk=\"}]\n"
        );
    }

    #[test]
    fn test_pretty_array_parses_back() {
        let chunks = vec![Chunk::new("m", 0, 2, "aGVs"), Chunk::new("m", 1, 2, "bG8=")];
        let out = render(&chunks, true);
        assert!(out.contains("\n  {"));

        let parsed: Vec<Chunk> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, chunks);
    }

    #[test]
    fn test_no_chunks_is_empty_array() {
        assert_eq!(render(&[], false), "[]\n");
        assert_eq!(render(&[], true), "[]\n");
    }

    #[test]
    fn test_streamed_output_matches_serde_layout() {
        let chunks = vec![
            Chunk::new("m", 0, 3, "\"caf"),
            Chunk::new("m", 1, 3, "\\u00"),
            Chunk::new("m", 2, 3, "e9\""),
        ];
        assert_eq!(
            render(&chunks, true),
            format!("{}\n", serde_json::to_string_pretty(&chunks).unwrap())
        );
        assert_eq!(
            render(&chunks, false),
            format!("{}\n", serde_json::to_string(&chunks).unwrap())
        );
    }

    #[test]
    fn test_chunks_are_written_before_finish() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.write_chunk(&Chunk::new("m", 0, 2, "aGVs")).unwrap();
        let after_first = formatter.writer.len();
        assert!(after_first > 0);

        formatter.write_chunk(&Chunk::new("m", 1, 2, "bG8=")).unwrap();
        assert!(formatter.writer.len() > after_first);

        formatter.finish().unwrap();
        let parsed: Vec<Chunk> = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
