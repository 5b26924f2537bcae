//! The chunk record handed to the transport layer

use serde::{Deserialize, Serialize};

/// One size-bounded slice of an encoded message.
///
/// Serializes to the plain `{message_id, chunk_position, chunk_total,
/// chunk_data}` structure; how that reaches the wire is the transport's
/// business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chunk {
    message_id: String,
    chunk_position: usize,
    chunk_total: usize,
    chunk_data: String,
}

impl Chunk {
    /// Build a chunk record.
    ///
    /// No invariants are checked here; reassembly validates the set as a whole.
    pub fn new(
        message_id: impl Into<String>,
        chunk_position: usize,
        chunk_total: usize,
        chunk_data: impl Into<String>,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            chunk_position,
            chunk_total,
            chunk_data: chunk_data.into(),
        }
    }

    /// Identifier of the owning message
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// Zero-based position within the message
    pub fn chunk_position(&self) -> usize {
        self.chunk_position
    }

    /// Number of chunks the message was split into
    pub fn chunk_total(&self) -> usize {
        self.chunk_total
    }

    /// Slice of the encoded message
    pub fn chunk_data(&self) -> &str {
        &self.chunk_data
    }

    /// Consume the chunk, keeping only its data
    pub fn into_data(self) -> String {
        self.chunk_data
    }

    /// Size of `chunk_data` in bytes
    pub fn len(&self) -> usize {
        self.chunk_data.len()
    }

    /// Returns true if `chunk_data` is empty
    pub fn is_empty(&self) -> bool {
        self.chunk_data.is_empty()
    }

    /// Returns true if this is the first chunk
    pub fn is_first(&self) -> bool {
        self.chunk_position == 0
    }

    /// Returns true if this is the last chunk
    pub fn is_last(&self) -> bool {
        self.chunk_position.checked_add(1) == Some(self.chunk_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let chunk = Chunk::new("msg-1", 2, 4, "aGVs");
        assert_eq!(chunk.message_id(), "msg-1");
        assert_eq!(chunk.chunk_position(), 2);
        assert_eq!(chunk.chunk_total(), 4);
        assert_eq!(chunk.chunk_data(), "aGVs");
        assert_eq!(chunk.len(), 4);
        assert!(!chunk.is_empty());
        assert!(!chunk.is_first());
        assert!(!chunk.is_last());
    }

    #[test]
    fn test_first_and_last() {
        let only = Chunk::new("m", 0, 1, "");
        assert!(only.is_first());
        assert!(only.is_last());
        assert!(only.is_empty());

        let last = Chunk::new("m", 3, 4, "bGQ=");
        assert!(last.is_last());
    }

    #[test]
    fn test_is_last_at_maximum_position() {
        let chunk = Chunk::new("m", usize::MAX, usize::MAX, "aGk=");
        assert!(!chunk.is_last());

        let json = format!(
            r#"{{"message_id":"m","chunk_position":{},"chunk_total":1,"chunk_data":""}}"#,
            usize::MAX
        );
        let parsed: Chunk = serde_json::from_str(&json).unwrap();
        assert!(!parsed.is_last());
        assert!(!parsed.is_first());
    }

    #[test]
    fn test_serialized_field_names() {
        let chunk = Chunk::new("msg-1", 0, 1, "aGk=");
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message_id": "msg-1",
                "chunk_position": 0,
                "chunk_total": 1,
                "chunk_data": "aGk="
            })
        );
    }

    #[test]
    fn test_deserialize_from_transport_shape() {
        let chunk: Chunk = serde_json::from_str(
            r#"{"message_id":"abc","chunk_position":1,"chunk_total":2,"chunk_data":"xyz"}"#,
        )
        .unwrap();
        assert_eq!(chunk, Chunk::new("abc", 1, 2, "xyz"));
    }
}
