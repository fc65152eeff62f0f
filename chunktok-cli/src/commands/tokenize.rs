//! Tokenize command implementation

use super::CommonArgs;
use crate::input::unescape_delimiter;
use crate::output::{create_formatter, OutputFormat, Record};
use crate::progress::FileProgress;
use anyhow::{Context, Result};
use chunktok_core::Tokenizer;
use clap::Args;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Token delimiter; accepts \n, \r, \t, \0 and \\ escapes
    #[arg(short, long, value_name = "DELIM", default_value = "\\n")]
    pub delimiter: String,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let settings = self.common.settings()?;
        let delimiter = unescape_delimiter(&self.delimiter)?;
        let tokenizer = Tokenizer::new(delimiter)?.with_config(settings.reader);

        let files = self.common.inputs()?;
        let mut formatter = create_formatter(
            settings.format,
            self.common.open_output()?,
            settings.pretty_json,
        );

        let progress = FileProgress::start(files.len(), self.common.quiet);

        let mut multiline_warned = settings.format != OutputFormat::Text;

        for path in &files {
            let name = path.display().to_string();
            let mut index = 0;

            let summary = tokenizer
                .tokenize(path, |token| {
                    if !multiline_warned && token.contains('\n') {
                        log::warn!(
                            "{name}: token {index} spans several lines; use --format json to keep token boundaries"
                        );
                        multiline_warned = true;
                    }
                    formatter.write_record(&Record::Token {
                        file: &name,
                        index,
                        token,
                    })?;
                    index += 1;
                    Ok(())
                })
                .with_context(|| format!("Failed to tokenize {name}"))?;

            log::info!(
                "{}: {} tokens from {} bytes in {} chunks",
                name,
                summary.tokens,
                summary.read.bytes_read,
                summary.read.chunks
            );
            progress.advance(path);
        }

        formatter.finish()?;
        progress.finish();

        Ok(())
    }
}
