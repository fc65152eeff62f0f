//! Pending-buffer state for one read operation
//!
//! The accumulator owns everything that changes between read steps: the
//! cursor, the pending decoded text and the streaming decoder. It performs no
//! I/O, so the dispatch rules can be exercised directly with byte slices.

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use encoding_rs::{CoderResult, Decoder, DecoderResult, Encoding};

/// Text handed to the chunk callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Carry from the previous dispatch followed by newly decoded text
    pub text: String,
    /// True when the cursor has reached the frozen file size
    pub is_final: bool,
}

/// Cursor, pending text and decoder state for one operation
pub struct Accumulator {
    decoder: Decoder,
    encoding: &'static Encoding,
    strict: bool,
    threshold: usize,
    file_size: u64,
    cursor: u64,
    pending: String,
    replaced: bool,
}

impl std::fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accumulator")
            .field("encoding", &self.encoding.name())
            .field("threshold", &self.threshold)
            .field("file_size", &self.file_size)
            .field("cursor", &self.cursor)
            .field("pending_len", &self.pending.len())
            .finish()
    }
}

impl Accumulator {
    /// Create an accumulator for a source of `file_size` bytes
    pub fn new(config: &ReaderConfig, file_size: u64) -> Self {
        Self {
            // BOM sniffing would drop bytes from the first chunk
            decoder: config.encoding.new_decoder_without_bom_handling(),
            encoding: config.encoding,
            strict: config.strict_decoding,
            threshold: config.chunk_size_threshold,
            file_size,
            cursor: 0,
            pending: String::new(),
            replaced: false,
        }
    }

    /// Bytes consumed from the source so far
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Size captured when the source was opened
    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    /// Bytes left before the frozen size is reached
    pub fn remaining(&self) -> u64 {
        self.file_size - self.cursor
    }

    /// Decoded text waiting for the next dispatch
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// True once every byte up to the frozen size has been consumed
    pub fn is_complete(&self) -> bool {
        self.cursor == self.file_size
    }

    /// Whether lossy decoding has substituted U+FFFD at any point
    pub fn had_replacements(&self) -> bool {
        self.replaced
    }

    /// Feed the bytes of one read step
    ///
    /// Returns the chunk to dispatch when the pending text exceeds the
    /// threshold or the frozen size has been reached. The pending buffer is
    /// empty afterwards until [`resume`](Self::resume) installs the carry.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Option<Chunk>> {
        debug_assert!(bytes.len() as u64 <= self.remaining());

        self.cursor += bytes.len() as u64;
        let last = self.is_complete();
        self.decode(bytes, last)?;

        if self.pending.len() > self.threshold || last {
            return Ok(Some(Chunk {
                text: std::mem::take(&mut self.pending),
                is_final: last,
            }));
        }

        Ok(None)
    }

    /// Install the carry returned by the chunk callback
    pub fn resume(&mut self, carry: String) {
        debug_assert!(self.pending.is_empty());
        self.pending = carry;
    }

    fn decode(&mut self, mut bytes: &[u8], last: bool) -> Result<()> {
        loop {
            let needed = if self.strict {
                self.decoder
                    .max_utf8_buffer_length_without_replacement(bytes.len())
            } else {
                self.decoder.max_utf8_buffer_length(bytes.len())
            };
            self.pending.reserve(needed.unwrap_or(bytes.len()).max(4));

            let (output_full, read) = if self.strict {
                let (result, read) = self.decoder.decode_to_string_without_replacement(
                    bytes,
                    &mut self.pending,
                    last,
                );
                match result {
                    DecoderResult::InputEmpty => (false, read),
                    DecoderResult::OutputFull => (true, read),
                    DecoderResult::Malformed(_, _) => {
                        return Err(Error::Decode {
                            offset: self.cursor,
                            encoding: self.encoding.name(),
                        });
                    }
                }
            } else {
                let (result, read, replaced) =
                    self.decoder.decode_to_string(bytes, &mut self.pending, last);
                if replaced && !self.replaced {
                    log::warn!(
                        "malformed {} input before byte {}, substituted U+FFFD",
                        self.encoding.name(),
                        self.cursor
                    );
                    self.replaced = true;
                }
                (matches!(result, CoderResult::OutputFull), read)
            };

            bytes = &bytes[read..];
            if !output_full {
                return Ok(());
            }
        }
    }
}
