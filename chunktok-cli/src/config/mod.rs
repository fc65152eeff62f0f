//! Configuration file support

use crate::error::CliError;
use anyhow::{Context, Result};
use chunktok_core::{config::defaults, ReaderConfigBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Reader configuration
    #[serde(default)]
    pub reader: ReaderSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Reader-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ReaderSection {
    /// Bytes requested per read
    pub read_buffer_size: usize,

    /// Pending size in bytes that triggers a dispatch once exceeded
    pub chunk_size_threshold: usize,

    /// Encoding label
    pub encoding: String,

    /// Fail on malformed input instead of substituting U+FFFD
    pub strict_decoding: bool,
}

impl Default for ReaderSection {
    fn default() -> Self {
        Self {
            read_buffer_size: defaults::READ_BUFFER_SIZE,
            chunk_size_threshold: defaults::CHUNK_SIZE_THRESHOLD,
            encoding: defaults::ENCODING.to_string(),
            strict_decoding: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format ("text" or "json")
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e.message())).into()
        })
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Seed a reader config builder with the file's values
    pub fn reader_builder(&self) -> ReaderConfigBuilder {
        ReaderConfigBuilder::new()
            .read_buffer_size(self.reader.read_buffer_size)
            .chunk_size_threshold(self.reader.chunk_size_threshold)
            .encoding(self.reader.encoding.clone())
            .strict_decoding(self.reader.strict_decoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chunktok.toml");
        fs::write(&path, "[reader]\nread_buffer_size = 64\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.reader.read_buffer_size, 64);
        assert_eq!(config.reader.chunk_size_threshold, 10_000);
        assert_eq!(config.reader.encoding, "utf-8");
        assert_eq!(config.output, OutputSection::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[reader\nread_buffer_size = ").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = CliConfig::load(Path::new("/nonexistent/chunktok.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CliConfig::default();
        let rendered = config.to_toml().unwrap();
        let parsed: CliConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_reader_builder_uses_file_values() {
        let mut config = CliConfig::default();
        config.reader.chunk_size_threshold = 0;
        config.reader.encoding = "latin1".to_string();

        let reader = config.reader_builder().build().unwrap();
        assert_eq!(reader.chunk_size_threshold(), 0);
        assert_eq!(reader.encoding().name(), "windows-1252");
    }
}
