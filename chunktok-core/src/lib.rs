//! Bounded-memory chunked file reading with a boundary-safe tokenizer
//!
//! This crate streams a file in bounded reads so that files larger than
//! available memory can be processed incrementally. Decoded text accumulates
//! in a pending buffer and is handed to a callback whenever it grows past a
//! threshold, or when the end of the file is reached. The callback may hand
//! back a suffix it could not use yet (the carry), which is prepended to the
//! next chunk.
//!
//! The [`Tokenizer`] uses that carry to split a file on a delimiter without
//! ever losing, duplicating or mis-splitting a token that straddles a chunk
//! boundary.
//!
//! # Architecture
//!
//! - [`accumulator`]: cursor, pending buffer and streaming decoder, no I/O
//! - [`source`]: scoped read-only file handle with a frozen size snapshot
//! - [`reader`]: the sequential read loop and dispatch protocol
//! - [`tokenizer`]: the delimiter policy layered on the reader
//!
//! # Example
//!
//! ```rust
//! use chunktok_core::{ReaderConfig, Tokenizer};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("input.csv");
//! std::fs::write(&path, "a,b,c").unwrap();
//!
//! let config = ReaderConfig::builder()
//!     .read_buffer_size(2)
//!     .chunk_size_threshold(1)
//!     .build()
//!     .unwrap();
//! let tokenizer = Tokenizer::new(",").unwrap().with_config(config);
//!
//! let mut tokens = Vec::new();
//! tokenizer
//!     .tokenize(&path, |token| {
//!         tokens.push(token.to_string());
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(tokens, ["a", "b", "c"]);
//! ```

#![warn(missing_docs)]

pub mod accumulator;
pub mod config;
pub mod error;
pub mod reader;
pub mod source;
pub mod tokenizer;

pub use accumulator::{Accumulator, Chunk};
pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use error::{CallbackError, Error, Result};
pub use reader::{process, ChunkAction, ChunkReader, ReadSummary};
pub use tokenizer::{tokenize, TokenSummary, Tokenizer};

// Re-export so callers can name encodings without a direct dependency
pub use encoding_rs::Encoding;
