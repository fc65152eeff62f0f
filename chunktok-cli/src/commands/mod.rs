//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use chunktok_core::ReaderConfig;
use clap::{Args, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub mod chunks;
pub mod generate_config;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split files into delimiter-separated tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Show how files are dispatched in chunks
    Chunks(chunks::ChunksArgs),

    /// Print a configuration file with default values
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(),
            Commands::Chunks(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by the commands that read files
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config file, else text)
    ///
    /// Text writes one token per line, so tokens that themselves contain a
    /// newline cannot be told apart; use json for those inputs.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CHUNKTOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Bytes requested per read
    #[arg(long, value_name = "BYTES")]
    pub read_buffer_size: Option<usize>,

    /// Pending size in bytes that triggers a dispatch once exceeded
    #[arg(long, value_name = "BYTES")]
    pub threshold: Option<usize>,

    /// Input encoding label (e.g. utf-8, windows-1252, shift_jis)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Fail on malformed input instead of substituting U+FFFD
    #[arg(long)]
    pub strict: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging the config file with flags
#[derive(Debug)]
pub struct Settings {
    /// Reader configuration
    pub reader: ReaderConfig,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl CommonArgs {
    /// Merge the config file (if any) with command-line overrides
    pub fn settings(&self) -> Result<Settings> {
        let file = CliConfig::load_or_default(self.config.as_deref())?;

        let mut builder = file.reader_builder();
        if let Some(size) = self.read_buffer_size {
            builder = builder.read_buffer_size(size);
        }
        if let Some(threshold) = self.threshold {
            builder = builder.chunk_size_threshold(threshold);
        }
        if let Some(label) = &self.encoding {
            builder = builder.encoding(label.clone());
        }
        if self.strict {
            builder = builder.strict_decoding(true);
        }
        let reader = builder.build()?;

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&file.output.default_format, true)
                .map_err(CliError::ConfigError)?,
        };

        log::debug!("effective settings: {reader:?}, format {format:?}");

        Ok(Settings {
            reader,
            format,
            pretty_json: file.output.pretty_json,
        })
    }

    /// Resolve input patterns to files
    pub fn inputs(&self) -> Result<Vec<PathBuf>> {
        resolve_patterns(&self.input)
    }

    /// Open the output destination
    pub fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn common_args(config: Option<PathBuf>) -> CommonArgs {
        CommonArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            config,
            read_buffer_size: None,
            threshold: None,
            encoding: None,
            strict: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = common_args(None).settings().unwrap();
        assert_eq!(settings.reader.read_buffer_size(), 2048);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.pretty_json);
    }

    #[test]
    fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chunktok.toml");
        fs::write(
            &path,
            "[reader]\nread_buffer_size = 64\nchunk_size_threshold = 5\n\n\
             [output]\ndefault_format = \"json\"\npretty_json = true\n",
        )
        .unwrap();

        let mut args = common_args(Some(path));
        args.threshold = Some(0);
        args.strict = true;

        let settings = args.settings().unwrap();
        assert_eq!(settings.reader.read_buffer_size(), 64);
        assert_eq!(settings.reader.chunk_size_threshold(), 0);
        assert!(settings.reader.strict_decoding());
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.pretty_json);
    }

    #[test]
    fn test_unknown_format_in_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chunktok.toml");
        fs::write(&path, "[output]\ndefault_format = \"yaml\"\n").unwrap();

        let err = common_args(Some(path)).settings().unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_zero_read_buffer_rejected() {
        let mut args = common_args(None);
        args.read_buffer_size = Some(0);

        let err = args.settings().unwrap_err();
        assert!(err.to_string().contains("read_buffer_size"));
    }
}
