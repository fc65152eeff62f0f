//! Delimiter tokenizer built on the chunked reader
//!
//! Every dispatched chunk is split on the delimiter. All pieces but the last
//! are complete tokens. The last piece is returned to the reader as the
//! carry, so a token (or a delimiter) cut by a chunk boundary is completed by
//! the following chunk. On the final chunk the last piece is emitted too,
//! because end of file terminates it.

use crate::config::ReaderConfig;
use crate::error::{CallbackError, Error, Result};
use crate::reader::{ChunkAction, ChunkReader, ReadSummary};
use std::io::Read;
use std::path::Path;

/// Outcome of a completed tokenize operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSummary {
    /// Tokens delivered to the callback
    pub tokens: usize,
    /// Counters from the underlying read
    pub read: ReadSummary,
}

/// Splits a file into delimiter-separated tokens
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiter: String,
    reader: ChunkReader,
}

impl Tokenizer {
    /// Create a tokenizer with the default reader configuration
    ///
    /// Fails with [`Error::InvalidConfig`] if `delimiter` is empty.
    pub fn new(delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(Error::InvalidConfig("delimiter must not be empty".into()));
        }

        Ok(Self {
            delimiter,
            reader: ChunkReader::default(),
        })
    }

    /// Use `config` for the underlying reads
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.reader = ChunkReader::new(config);
        self
    }

    /// The delimiter tokens are split on
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Tokenize the file at `path`, calling `on_token` for each token in order
    ///
    /// Returning `Err` from `on_token` aborts the operation with
    /// [`Error::Callback`].
    pub fn tokenize<P, F>(&self, path: P, mut on_token: F) -> Result<TokenSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&str) -> std::result::Result<(), CallbackError>,
    {
        let mut tokens = 0;
        let read = self.reader.process(path, |text, is_final| {
            self.split_chunk(text, is_final, &mut on_token, &mut tokens)
        })?;

        Ok(TokenSummary { tokens, read })
    }

    /// Tokenize any reader holding `size` bytes
    pub fn tokenize_reader<R, F>(
        &self,
        reader: R,
        size: u64,
        mut on_token: F,
    ) -> Result<TokenSummary>
    where
        R: Read,
        F: FnMut(&str) -> std::result::Result<(), CallbackError>,
    {
        let mut tokens = 0;
        let read = self.reader.process_reader(reader, size, |text, is_final| {
            self.split_chunk(text, is_final, &mut on_token, &mut tokens)
        })?;

        Ok(TokenSummary { tokens, read })
    }

    fn split_chunk<F>(
        &self,
        text: &str,
        is_final: bool,
        on_token: &mut F,
        tokens: &mut usize,
    ) -> ChunkAction
    where
        F: FnMut(&str) -> std::result::Result<(), CallbackError>,
    {
        let mut pieces = text.split(self.delimiter.as_str());
        // split always yields at least one piece
        let mut current = pieces.next().unwrap_or_default();

        for next in pieces {
            if let Err(e) = on_token(current) {
                return ChunkAction::Fail(e);
            }
            *tokens += 1;
            current = next;
        }

        if !is_final {
            return ChunkAction::carry(current);
        }

        match on_token(current) {
            Ok(()) => {
                *tokens += 1;
                ChunkAction::consumed()
            }
            Err(e) => ChunkAction::Fail(e),
        }
    }
}

/// Tokenize `path` on `delimiter` and report the outcome to `on_complete`
///
/// `on_complete` is called exactly once, after the last token. An empty
/// delimiter is reported through `on_complete` without opening the file.
pub fn tokenize<P, F, C>(path: P, delimiter: &str, on_token: F, on_complete: C)
where
    P: AsRef<Path>,
    F: FnMut(&str) -> std::result::Result<(), CallbackError>,
    C: FnOnce(Result<TokenSummary>),
{
    let result = Tokenizer::new(delimiter).and_then(|t| t.tokenize(path, on_token));
    on_complete(result);
}
