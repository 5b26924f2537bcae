//! Input handling module

pub mod chunk_reader;
pub mod file_reader;

pub use chunk_reader::parse_chunks;
pub use file_reader::FileReader;
