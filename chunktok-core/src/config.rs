//! Configuration for chunked reading

use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_8};

/// Default configuration constants
pub mod defaults {
    /// Bytes requested per read call
    pub const READ_BUFFER_SIZE: usize = 2048;

    /// Pending text size (in bytes) that must be exceeded before a dispatch
    pub const CHUNK_SIZE_THRESHOLD: usize = 10_000;

    /// Encoding label used when none is configured
    pub const ENCODING: &str = "utf-8";
}

/// Options for one read operation
///
/// All values are fixed for the duration of an operation. Use
/// [`ReaderConfig::builder`] to construct a validated instance.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub(crate) read_buffer_size: usize,
    pub(crate) chunk_size_threshold: usize,
    pub(crate) encoding: &'static Encoding,
    pub(crate) strict_decoding: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            read_buffer_size: defaults::READ_BUFFER_SIZE,
            chunk_size_threshold: defaults::CHUNK_SIZE_THRESHOLD,
            encoding: UTF_8,
            strict_decoding: false,
        }
    }
}

impl ReaderConfig {
    /// Create a configuration builder
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }

    /// Maximum number of bytes requested per read
    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    /// Pending size that triggers a dispatch once exceeded
    pub fn chunk_size_threshold(&self) -> usize {
        self.chunk_size_threshold
    }

    /// Encoding used to decode file bytes
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Whether malformed input is an error rather than replaced with U+FFFD
    pub fn strict_decoding(&self) -> bool {
        self.strict_decoding
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.read_buffer_size == 0 {
            return Err(Error::InvalidConfig(
                "read_buffer_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`ReaderConfig`]
#[derive(Debug, Default)]
pub struct ReaderConfigBuilder {
    read_buffer_size: Option<usize>,
    chunk_size_threshold: Option<usize>,
    encoding: Option<String>,
    strict_decoding: Option<bool>,
}

impl ReaderConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bytes requested per read
    pub fn read_buffer_size(mut self, bytes: usize) -> Self {
        self.read_buffer_size = Some(bytes);
        self
    }

    /// Set the dispatch threshold in bytes (0 dispatches after every read)
    pub fn chunk_size_threshold(mut self, bytes: usize) -> Self {
        self.chunk_size_threshold = Some(bytes);
        self
    }

    /// Set the encoding by WHATWG label, e.g. `"utf-8"` or `"windows-1252"`
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Fail on malformed input instead of substituting U+FFFD
    pub fn strict_decoding(mut self, strict: bool) -> Self {
        self.strict_decoding = Some(strict);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ReaderConfig> {
        let mut config = ReaderConfig::default();

        if let Some(size) = self.read_buffer_size {
            config.read_buffer_size = size;
        }

        if let Some(threshold) = self.chunk_size_threshold {
            config.chunk_size_threshold = threshold;
        }

        if let Some(label) = self.encoding {
            // Labels mapped to the replacement encoding would decode any
            // input to a single U+FFFD
            config.encoding = Encoding::for_label_no_replacement(label.trim().as_bytes())
                .ok_or(Error::UnknownEncoding(label))?;
        }

        if let Some(strict) = self.strict_decoding {
            config.strict_decoding = strict;
        }

        config.validate()?;
        Ok(config)
    }
}
