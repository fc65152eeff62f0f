//! Plain text output formatter

use super::{Record, RecordFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one record per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &Record<'_>) -> Result<()> {
        match record {
            Record::Token { token, .. } => writeln!(self.writer, "{token}")?,
            Record::Chunk {
                file,
                index,
                bytes,
                is_final,
            } => {
                let marker = if *is_final { " (final)" } else { "" };
                writeln!(self.writer, "{file}: chunk {index}, {bytes} bytes{marker}")?
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
