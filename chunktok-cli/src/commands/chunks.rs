//! Chunks command implementation

use super::CommonArgs;
use crate::output::{create_formatter, Record};
use crate::progress::FileProgress;
use anyhow::{Context, Result};
use chunktok_core::{ChunkAction, ChunkReader};
use clap::Args;

/// Arguments for the chunks command
#[derive(Debug, Args)]
pub struct ChunksArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl ChunksArgs {
    /// Execute the chunks command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let settings = self.common.settings()?;
        let reader = ChunkReader::new(settings.reader);

        let files = self.common.inputs()?;
        let mut formatter = create_formatter(
            settings.format,
            self.common.open_output()?,
            settings.pretty_json,
        );

        let progress = FileProgress::start(files.len(), self.common.quiet);

        for path in &files {
            let name = path.display().to_string();
            let mut index = 0;

            let summary = reader
                .process(path, |text, is_final| {
                    let record = Record::Chunk {
                        file: &name,
                        index,
                        bytes: text.len(),
                        is_final,
                    };
                    index += 1;
                    match formatter.write_record(&record) {
                        Ok(()) => ChunkAction::consumed(),
                        Err(e) => ChunkAction::fail(e),
                    }
                })
                .with_context(|| format!("Failed to read {name}"))?;

            log::info!(
                "{}: {} bytes in {} reads, {} chunks",
                name,
                summary.bytes_read,
                summary.reads,
                summary.chunks
            );
            progress.advance(path);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }
}
