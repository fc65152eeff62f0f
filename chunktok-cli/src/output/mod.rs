//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One unit of command output
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Record<'a> {
    /// A token produced by the tokenizer
    Token {
        /// Source file
        file: &'a str,
        /// Zero-based position of the token within its file
        index: usize,
        /// Token text
        token: &'a str,
    },
    /// A chunk dispatched by the reader
    Chunk {
        /// Source file
        file: &'a str,
        /// Zero-based position of the chunk within its file
        index: usize,
        /// Byte length of the decoded chunk text
        bytes: usize,
        /// Whether this was the final chunk of the file
        is_final: bool,
    },
}

/// Trait for output formatters
pub trait RecordFormatter {
    /// Write a single record
    fn write_record(&mut self, record: &Record<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one record per line (ambiguous for tokens containing newlines)
    Text,
    /// JSON array of records
    Json,
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write>,
    pretty_json: bool,
) -> Box<dyn RecordFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
