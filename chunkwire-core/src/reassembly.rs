//! Receiver-side reassembly
//!
//! The receiver knows out of band which strategy the sender used; nothing in
//! the chunks themselves names it.

use crate::chunk::Chunk;
use crate::config::ProducerConfig;
use crate::encoding::EncodingStrategy;
use crate::error::{ChunkError, Result};
use std::borrow::Borrow;
use std::collections::btree_map::{BTreeMap, Entry};
use std::iter;
use std::sync::Arc;

/// Rebuilds messages from chunk sets using a fixed strategy
#[derive(Debug, Clone)]
pub struct Reassembler {
    strategy: Arc<dyn EncodingStrategy>,
}

impl Reassembler {
    /// Create a reassembler bound to `strategy`
    pub fn new(strategy: Arc<dyn EncodingStrategy>) -> Self {
        Self { strategy }
    }

    /// Create a reassembler for the strategy named in `config`
    pub fn from_config(config: &ProducerConfig) -> Result<Self> {
        Ok(Self::new(config.build_strategy()?))
    }

    /// The bound strategy
    pub fn strategy(&self) -> &dyn EncodingStrategy {
        &*self.strategy
    }

    /// Reassemble and decode one message.
    ///
    /// Chunks may arrive in any order. A chunk delivered twice with identical
    /// data is tolerated.
    ///
    /// # Errors
    ///
    /// - [`ChunkError::IncompleteChunkSet`] when positions are missing
    /// - [`ChunkError::InconsistentChunkSet`] when chunks disagree on
    ///   `message_id` or `chunk_total`, a position is out of range, two chunks
    ///   claim one position with different data, or the sizes could not have
    ///   come from one producer
    /// - [`ChunkError::Decode`] when the joined payload is not valid for the
    ///   strategy
    pub fn reassemble<I, C>(&self, chunks: I) -> Result<String>
    where
        I: IntoIterator<Item = C>,
        C: Borrow<Chunk>,
    {
        let encoded = join_chunks(chunks)?;
        let message = self.strategy.decode(&encoded)?;

        tracing::debug!(
            strategy = self.strategy.name(),
            encoded_len = encoded.len(),
            message_len = message.len(),
            "decoded reassembled message"
        );

        Ok(message)
    }
}

/// Validate a chunk set and concatenate its data in position order.
///
/// This is the strategy-independent half of [`Reassembler::reassemble`].
pub fn join_chunks<I, C>(chunks: I) -> Result<String>
where
    I: IntoIterator<Item = C>,
    C: Borrow<Chunk>,
{
    let mut chunks = chunks.into_iter();
    let first = chunks.next().ok_or(ChunkError::IncompleteChunkSet {
        message_id: String::new(),
        received: 0,
        expected: 1,
    })?;

    let message_id = first.borrow().message_id().to_owned();
    let chunk_total = first.borrow().chunk_total();
    if chunk_total == 0 {
        return Err(ChunkError::inconsistent(format!(
            "message '{message_id}' declares chunk_total 0"
        )));
    }

    let mut by_position: BTreeMap<usize, C> = BTreeMap::new();
    for item in iter::once(first).chain(chunks) {
        let chunk = item.borrow();

        if chunk.message_id() != message_id {
            return Err(ChunkError::inconsistent(format!(
                "chunk at position {} belongs to message '{}', expected '{message_id}'",
                chunk.chunk_position(),
                chunk.message_id()
            )));
        }
        if chunk.chunk_total() != chunk_total {
            return Err(ChunkError::inconsistent(format!(
                "chunk at position {} declares chunk_total {}, expected {chunk_total}",
                chunk.chunk_position(),
                chunk.chunk_total()
            )));
        }
        let position = chunk.chunk_position();
        if position >= chunk_total {
            return Err(ChunkError::inconsistent(format!(
                "chunk_position {position} is out of range for chunk_total {chunk_total}"
            )));
        }

        match by_position.entry(position) {
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
            Entry::Occupied(existing) => {
                if existing.get().borrow().chunk_data() != chunk.chunk_data() {
                    return Err(ChunkError::inconsistent(format!(
                        "two chunks at position {position} carry different data"
                    )));
                }
                tracing::warn!(
                    message_id = %message_id,
                    position,
                    "dropping redelivered chunk"
                );
            }
        }
    }

    if by_position.len() < chunk_total {
        return Err(ChunkError::IncompleteChunkSet {
            message_id,
            received: by_position.len(),
            expected: chunk_total,
        });
    }

    check_sizes(&by_position, chunk_total)?;

    let encoded_len = by_position.values().map(|c| c.borrow().len()).sum();
    let mut encoded = String::with_capacity(encoded_len);
    for chunk in by_position.values() {
        encoded.push_str(chunk.borrow().chunk_data());
    }

    tracing::debug!(
        message_id = %message_id,
        chunk_total,
        encoded_len,
        "joined chunk set"
    );

    Ok(encoded)
}

/// Every chunk but the last carries exactly the producer's chunk size; the last
/// carries at most that and is only empty when it is the only chunk.
fn check_sizes<C: Borrow<Chunk>>(by_position: &BTreeMap<usize, C>, chunk_total: usize) -> Result<()> {
    let full_len = by_position
        .get(&0)
        .map(|c| c.borrow().len())
        .unwrap_or_default();

    for (&position, chunk) in by_position {
        let len = chunk.borrow().len();
        let is_last = position + 1 == chunk_total;

        let valid = if is_last {
            len <= full_len && (len > 0 || chunk_total == 1)
        } else {
            len == full_len && len > 0
        };

        if !valid {
            return Err(ChunkError::inconsistent(format!(
                "chunk at position {position} has {len} bytes, which does not fit a \
                 {chunk_total}-chunk split of {full_len}-byte chunks"
            )));
        }
    }

    Ok(())
}
