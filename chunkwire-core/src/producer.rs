//! Chunk production
//!
//! A [`ChunkProducer`] is built for one message. It encodes the message once,
//! freezes the size accounting, and hands out lazy chunk iterators.

use crate::chunk::Chunk;
use crate::config::ProducerConfig;
use crate::encoding::EncodingStrategy;
use crate::error::{ChunkError, Result};
use crate::reassembly::Reassembler;
use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

/// Splits one encoded message into size-bounded chunks.
///
/// Sizes are counted in bytes of the encoded form. An empty encoded message
/// still produces exactly one (empty) chunk, so the receiver can tell "empty
/// message" apart from "nothing arrived".
#[derive(Debug, Clone)]
pub struct ChunkProducer {
    message_id: String,
    chunk_size: usize,
    strategy: Arc<dyn EncodingStrategy>,
    encoded_message: String,
    chunk_total: usize,
}

impl ChunkProducer {
    /// Encode `message` and prepare it for chunking.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::InvalidConfiguration`] if `chunk_size` is 0 or
    ///   `message_id` is empty
    /// - [`ChunkError::Encode`] if the strategy cannot encode the message or
    ///   emits non-ASCII output
    pub fn new(
        message: &str,
        message_id: impl Into<String>,
        chunk_size: usize,
        strategy: Arc<dyn EncodingStrategy>,
    ) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ChunkError::config("chunk_size must be greater than 0"));
        }

        let message_id = message_id.into();
        if message_id.is_empty() {
            return Err(ChunkError::config("message_id must not be empty"));
        }

        let encoded_message = strategy.encode(message)?;

        // Byte offsets are only valid cut points if every byte is a character
        if !encoded_message.is_ascii() {
            return Err(ChunkError::Encode {
                strategy: strategy.name(),
                reason: "strategy produced non-ASCII output".to_string(),
            });
        }

        let chunk_total = encoded_message.len().div_ceil(chunk_size).max(1);

        tracing::debug!(
            message_id = %message_id,
            strategy = strategy.name(),
            message_len = message.len(),
            encoded_len = encoded_message.len(),
            chunk_size,
            chunk_total,
            "prepared message for chunking"
        );

        Ok(Self {
            message_id,
            chunk_size,
            strategy,
            encoded_message,
            chunk_total,
        })
    }

    /// Build a producer from a validated configuration
    pub fn from_config(
        message: &str,
        message_id: impl Into<String>,
        config: &ProducerConfig,
    ) -> Result<Self> {
        config.validate()?;
        Self::new(message, message_id, config.chunk_size, config.build_strategy()?)
    }

    /// Identifier copied into every chunk
    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    /// Maximum bytes of encoded data per chunk
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of chunks this message splits into (at least 1)
    pub fn chunk_total(&self) -> usize {
        self.chunk_total
    }

    /// The transport-safe form of the message
    pub fn encoded_message(&self) -> &str {
        &self.encoded_message
    }

    /// Size of the encoded message in bytes
    pub fn encoded_message_length(&self) -> usize {
        self.encoded_message.len()
    }

    /// The bound strategy
    pub fn strategy(&self) -> &dyn EncodingStrategy {
        &*self.strategy
    }

    /// A fresh forward-only iterator over all chunks, in position order
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            producer: self,
            next_position: 0,
        }
    }

    /// A reassembler bound to the same strategy
    pub fn reassembler(&self) -> Reassembler {
        Reassembler::new(Arc::clone(&self.strategy))
    }

    /// Reassemble chunks with this producer's strategy.
    ///
    /// Works for any chunk set encoded with the same strategy, not only this
    /// producer's own output.
    pub fn reassemble<I, C>(&self, chunks: I) -> Result<String>
    where
        I: IntoIterator<Item = C>,
        C: Borrow<Chunk>,
    {
        self.reassembler().reassemble(chunks)
    }

    fn chunk_at(&self, position: usize) -> Chunk {
        let start = position * self.chunk_size;
        let end = start
            .saturating_add(self.chunk_size)
            .min(self.encoded_message.len());

        // `encoded_message` is ASCII, so every offset is a char boundary
        let data = &self.encoded_message[start..end];

        tracing::trace!(
            message_id = %self.message_id,
            position,
            len = data.len(),
            "emitting chunk"
        );

        Chunk::new(self.message_id.clone(), position, self.chunk_total, data)
    }
}

impl fmt::Display for ChunkProducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} producer (chunk_total: {}, encoded_message_length: {}, chunk_size: {})",
            self.strategy.name(),
            self.chunk_total,
            self.encoded_message.len(),
            self.chunk_size
        )
    }
}

/// Lazy iterator over a producer's chunks.
///
/// Materializes one chunk per call to `next`. Call
/// [`ChunkProducer::chunks`] again to start over.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    producer: &'a ChunkProducer,
    next_position: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        if self.next_position >= self.producer.chunk_total {
            return None;
        }
        let chunk = self.producer.chunk_at(self.next_position);
        self.next_position += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.producer.chunk_total - self.next_position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}
