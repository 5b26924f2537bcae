//! Chunkwire CLI library
//!
//! This library provides the command-line interface for splitting messages
//! into size-bounded chunks and reassembling them.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
