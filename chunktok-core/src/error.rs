//! Error types for chunked reading and tokenizing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error value a chunk or token callback returns to abort an operation
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by a read or tokenize operation
///
/// Every failure is terminal for the operation that produced it. Callbacks
/// that already ran before the failure are not rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// The file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// Path that was being opened
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The file size could not be queried after opening
    #[error("failed to query size of {}: {source}", path.display())]
    Metadata {
        /// Path of the opened file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// A read call failed
    #[error("read failed at byte offset {offset}: {source}")]
    Read {
        /// Cursor position the read was issued at
        offset: u64,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The source ended before the size captured at open time
    #[error("input truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Size captured at open time
        expected: u64,
        /// Bytes actually read before end of input
        actual: u64,
    },

    /// Malformed input under strict decoding
    #[error("malformed {encoding} input near byte offset {offset}")]
    Decode {
        /// Cursor position after the read that contained the bad sequence
        offset: u64,
        /// Name of the encoding in use
        encoding: &'static str,
    },

    /// A chunk or token callback signaled failure
    #[error("callback aborted processing: {0}")]
    Callback(#[source] CallbackError),

    /// Configuration rejected before any I/O happened
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Encoding label not recognized
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}

impl Error {
    /// Byte offset associated with the failure, if any
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::Read { offset, .. } | Error::Decode { offset, .. } => Some(*offset),
            Error::Truncated { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

/// Result type for chunktok operations
pub type Result<T> = std::result::Result<T, Error>;
