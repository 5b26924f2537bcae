//! Error types for chunking and reassembly
//!
//! Every failure is deterministic for a given input, so nothing here is
//! retried internally. Callers decide whether to gather more chunks or fix
//! their configuration.

use thiserror::Error;

/// Errors produced while encoding, chunking, or reassembling a message
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Rejected producer or strategy configuration
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration
        reason: String,
    },

    /// The message could not be turned into its transport form
    #[error("{strategy} encoding failed: {reason}")]
    Encode {
        /// Name of the strategy that failed
        strategy: &'static str,
        /// Why encoding failed
        reason: String,
    },

    /// The reassembled payload is not valid for the strategy
    #[error("{strategy} decoding failed: {reason}")]
    Decode {
        /// Name of the strategy that failed
        strategy: &'static str,
        /// Why decoding failed
        reason: String,
    },

    /// Fewer distinct chunk positions than the declared total
    #[error("incomplete chunk set for message '{message_id}': received {received} of {expected} chunks")]
    IncompleteChunkSet {
        /// Message the chunks claim to belong to (empty when no chunk arrived)
        message_id: String,
        /// Distinct positions received
        received: usize,
        /// Positions required
        expected: usize,
    },

    /// Chunks that cannot belong to one valid message
    #[error("inconsistent chunk set: {reason}")]
    InconsistentChunkSet {
        /// Which invariant the chunks violate
        reason: String,
    },
}

impl ChunkError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        ChunkError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn inconsistent(reason: impl Into<String>) -> Self {
        ChunkError::InconsistentChunkSet {
            reason: reason.into(),
        }
    }
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkError>;
