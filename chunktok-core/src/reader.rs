//! Sequential bounded reads with threshold-driven dispatch
//!
//! A [`ChunkReader`] reads a source in steps of at most
//! `read_buffer_size` bytes, decodes each step into the pending buffer and
//! hands the pending text to a callback whenever it grows past
//! `chunk_size_threshold` bytes or the end of the source is reached. The
//! callback answers with a [`ChunkAction`]; a `Continue` carry becomes the
//! start of the next pending buffer.

use crate::accumulator::Accumulator;
use crate::config::ReaderConfig;
use crate::error::{CallbackError, Error, Result};
use crate::source::SourceFile;
use std::io::{self, Read};
use std::path::Path;

/// What the chunk callback wants the reader to do next
#[derive(Debug)]
pub enum ChunkAction {
    /// Keep reading; the string becomes the new pending buffer
    Continue(String),
    /// Stop reading and fail the operation
    Fail(CallbackError),
}

impl ChunkAction {
    /// Continue with an empty pending buffer
    pub fn consumed() -> Self {
        ChunkAction::Continue(String::new())
    }

    /// Continue, keeping `carry` for the next chunk
    pub fn carry(carry: impl Into<String>) -> Self {
        ChunkAction::Continue(carry.into())
    }

    /// Abort the operation with `error`
    pub fn fail(error: impl Into<CallbackError>) -> Self {
        ChunkAction::Fail(error.into())
    }
}

/// Counters describing a completed read operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    /// Bytes consumed from the source
    pub bytes_read: u64,
    /// Read steps performed
    pub reads: usize,
    /// Chunks dispatched to the callback
    pub chunks: usize,
}

/// Chunked reader for one configuration
#[derive(Debug, Clone, Default)]
pub struct ChunkReader {
    config: ReaderConfig,
}

impl ChunkReader {
    /// Create a reader with the given configuration
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Configuration used by this reader
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read the file at `path`, dispatching chunks to `on_chunk`
    ///
    /// `on_chunk` receives the pending text and whether it is the final
    /// chunk. The file handle is released before this returns, on success
    /// and on every error.
    pub fn process<P, F>(&self, path: P, on_chunk: F) -> Result<ReadSummary>
    where
        P: AsRef<Path>,
        F: FnMut(&str, bool) -> ChunkAction,
    {
        let mut source = SourceFile::open(path.as_ref())?;
        let size = source.size();
        self.process_reader(&mut source, size, on_chunk)
    }

    /// Run the read loop over any reader holding `size` bytes
    ///
    /// `size` plays the role of the size snapshot taken at open time: no
    /// byte past it is requested, and running out of input before it is an
    /// [`Error::Truncated`].
    pub fn process_reader<R, F>(
        &self,
        mut reader: R,
        size: u64,
        mut on_chunk: F,
    ) -> Result<ReadSummary>
    where
        R: Read,
        F: FnMut(&str, bool) -> ChunkAction,
    {
        let mut acc = Accumulator::new(&self.config, size);
        let mut buf = vec![0u8; self.config.read_buffer_size];
        let mut summary = ReadSummary::default();

        loop {
            let want = acc.remaining().min(buf.len() as u64) as usize;
            let read = read_step(&mut reader, &mut buf[..want], acc.cursor())?;

            if read == 0 && want > 0 {
                log::warn!(
                    "input ended at byte {} of {} expected",
                    acc.cursor(),
                    acc.file_size()
                );
                return Err(Error::Truncated {
                    expected: acc.file_size(),
                    actual: acc.cursor(),
                });
            }

            summary.reads += 1;
            log::trace!("read {} bytes at offset {}", read, acc.cursor());

            if let Some(chunk) = acc.push(&buf[..read])? {
                summary.chunks += 1;
                log::trace!(
                    "dispatching chunk {} ({} bytes, final: {})",
                    summary.chunks,
                    chunk.text.len(),
                    chunk.is_final
                );

                match on_chunk(&chunk.text, chunk.is_final) {
                    ChunkAction::Continue(carry) if !chunk.is_final => acc.resume(carry),
                    ChunkAction::Continue(_) => {}
                    ChunkAction::Fail(error) => {
                        log::debug!("chunk callback aborted at byte {}", acc.cursor());
                        return Err(Error::Callback(error));
                    }
                }
            }

            if acc.is_complete() {
                break;
            }
        }

        summary.bytes_read = acc.cursor();
        log::debug!(
            "read complete: {} bytes in {} reads, {} chunks",
            summary.bytes_read,
            summary.reads,
            summary.chunks
        );

        Ok(summary)
    }
}

/// Perform one read, retrying only on `Interrupted`
fn read_step<R: Read>(reader: &mut R, buf: &mut [u8], offset: u64) -> Result<usize> {
    if buf.is_empty() {
        return Ok(0);
    }

    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(Error::Read { offset, source }),
        }
    }
}

/// Read `path` in chunks and report the outcome to `on_complete`
///
/// `on_complete` is called exactly once, after the last `on_chunk` call and
/// after the file handle has been released.
pub fn process<P, F, C>(path: P, on_chunk: F, on_complete: C, config: &ReaderConfig)
where
    P: AsRef<Path>,
    F: FnMut(&str, bool) -> ChunkAction,
    C: FnOnce(Result<ReadSummary>),
{
    let result = ChunkReader::new(config.clone()).process(path, on_chunk);
    on_complete(result);
}
