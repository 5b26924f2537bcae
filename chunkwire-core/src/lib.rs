//! Size-bounded message chunking for record-limited transports
//!
//! This crate splits an arbitrarily large text message into ordered chunks
//! whose payload never exceeds a configured size (for example a message
//! broker's record limit), and rebuilds the original message from those
//! chunks in any arrival order.
//!
//! # Architecture
//!
//! - **Encoding strategies** ([`encoding`]): turn the message into an ASCII,
//!   transport-safe form and back. [`Base64Encoding`] is binary-safe and can be
//!   cut anywhere; [`EscapedJsonEncoding`] must be fully reassembled before it
//!   is decoded.
//! - **Producer** ([`ChunkProducer`]): encodes once, freezes the size
//!   accounting, and yields [`Chunk`]s lazily.
//! - **Reassembler** ([`Reassembler`]): validates a chunk set, orders it by
//!   position, and decodes it.
//!
//! The crate performs no I/O. Serializing chunks onto the wire and delivering
//! them belongs to the surrounding transport.
//!
//! # Example
//!
//! ```rust
//! use chunkwire_core::{Base64Encoding, ChunkProducer, Reassembler};
//! use std::sync::Arc;
//!
//! let strategy = Arc::new(Base64Encoding::new());
//! let producer = ChunkProducer::new("hello world", "msg-1", 4, strategy.clone()).unwrap();
//! assert_eq!(producer.chunk_total(), 4);
//!
//! // Transport may reorder
//! let mut chunks: Vec<_> = producer.chunks().collect();
//! chunks.reverse();
//!
//! let receiver = Reassembler::new(strategy);
//! assert_eq!(receiver.reassemble(chunks).unwrap(), "hello world");
//! ```

#![warn(missing_docs)]

pub mod chunk;
pub mod config;
pub mod encoding;
pub mod error;
pub mod producer;
pub mod reassembly;

pub use chunk::Chunk;
pub use config::{defaults, ConfigBuilder, ProducerConfig};
pub use encoding::{Base64Encoding, EncodingKind, EncodingStrategy, EscapedJsonEncoding};
pub use error::{ChunkError, Result};
pub use producer::{ChunkProducer, Chunks};
pub use reassembly::{join_chunks, Reassembler};
