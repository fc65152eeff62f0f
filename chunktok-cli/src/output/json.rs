//! JSON output formatter

use super::{Record, RecordFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - streams records as a JSON array
///
/// Records are written as they arrive, so memory stays bounded no matter
/// how many tokens a file holds.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    written: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            written: 0,
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &Record<'_>) -> Result<()> {
        let separator = if self.written == 0 { "[" } else { "," };
        if self.pretty {
            writeln!(self.writer, "{separator}")?;
            serde_json::to_writer_pretty(&mut self.writer, record)?;
        } else {
            write!(self.writer, "{separator}")?;
            serde_json::to_writer(&mut self.writer, record)?;
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.written == 0 {
            write!(self.writer, "[")?;
        } else if self.pretty {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "]")?;
        self.writer.flush()?;
        Ok(())
    }
}
